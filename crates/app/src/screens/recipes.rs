//! Recipe screens: a paged, searchable list and a read-only detail view.

use tracing::instrument;

use fridgemate_client::{ApiClient, RecipesApi};
use fridgemate_core::views::{InstructionStep, instruction_steps};
use fridgemate_core::{Recipe, RecipeSeq, UserId};

use crate::state::{ListState, LoadToken, TrackedList};

/// Recipes per page.
pub const PAGE_SIZE: u32 = 20;

/// Controller for the recipe list.
///
/// Pages start at 1. When a user is signed in their ID goes along with the
/// page request so the server sorts recipes matching their fridge first.
/// Search replaces the page contents until the query is cleared.
#[derive(Debug)]
pub struct RecipeListScreen {
    api: RecipesApi,
    list: TrackedList<Vec<Recipe>>,
    user_id: Option<UserId>,
    page: u32,
    pub query: String,
}

impl RecipeListScreen {
    #[must_use]
    pub fn new(api: &ApiClient, user_id: Option<UserId>) -> Self {
        Self {
            api: api.recipes(),
            list: TrackedList::new(),
            user_id,
            page: 1,
            query: String::new(),
        }
    }

    #[must_use]
    pub const fn list(&self) -> &ListState<Vec<Recipe>> {
        self.list.state()
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.list.begin()
    }

    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Recipe>, fridgemate_client::ApiError>,
    ) {
        self.list.finish(token, result);
    }

    /// Fetch the current page and apply the outcome.
    #[instrument(skip(self), fields(page = self.page))]
    pub async fn reload(&mut self) {
        let token = self.begin_load();
        let result = self.api.list(self.page, PAGE_SIZE, self.user_id).await;
        self.finish_load(token, result);
    }

    /// Run the search form. A blank query falls back to the paged list.
    #[instrument(skip(self), fields(query = %self.query))]
    pub async fn search(&mut self) {
        let name = self.query.trim().to_owned();
        if name.is_empty() {
            self.reload().await;
            return;
        }
        let token = self.begin_load();
        let result = self.api.search(&name).await;
        self.finish_load(token, result);
    }

    /// Clear the query and go back to the paged list.
    pub async fn reset_search(&mut self) {
        self.query.clear();
        self.reload().await;
    }

    /// Jump straight to a page; pages below 1 clamp to 1.
    pub async fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.reload().await;
    }

    pub async fn next_page(&mut self) {
        self.page += 1;
        self.reload().await;
    }

    /// No-op on the first page.
    pub async fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.reload().await;
        }
    }
}

/// Controller for one recipe's detail view.
#[derive(Debug)]
pub struct RecipeDetailScreen {
    api: RecipesApi,
    seq: RecipeSeq,
    recipe: TrackedList<Recipe>,
}

impl RecipeDetailScreen {
    #[must_use]
    pub fn new(api: &ApiClient, seq: RecipeSeq) -> Self {
        Self {
            api: api.recipes(),
            seq,
            recipe: TrackedList::new(),
        }
    }

    #[must_use]
    pub const fn seq(&self) -> RecipeSeq {
        self.seq
    }

    #[must_use]
    pub const fn recipe(&self) -> &ListState<Recipe> {
        self.recipe.state()
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.recipe.begin()
    }

    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Recipe, fridgemate_client::ApiError>,
    ) {
        self.recipe.finish(token, result);
    }

    /// Fetch the recipe and apply the outcome.
    #[instrument(skip(self), fields(seq = %self.seq))]
    pub async fn reload(&mut self) {
        let token = self.begin_load();
        let result = self.api.get(self.seq).await;
        self.finish_load(token, result);
    }

    /// The loaded recipe's instruction steps, blank ones omitted.
    #[must_use]
    pub fn steps(&self) -> Vec<InstructionStep> {
        self.recipe.data().map(instruction_steps).unwrap_or_default()
    }
}
