//! Refrigerator screen: the signed-in user's entries, grouped by type tabs,
//! with an add/edit form fed by the food catalog.

use std::str::FromStr;

use chrono::NaiveDate;
use tracing::instrument;

use fridgemate_client::{ApiClient, FoodsApi, FridgeApi};
use fridgemate_core::views::{Tab, food_types, foods_of_type, format_expiry, fridge_tabs};
use fridgemate_core::{
    EntryId, Food, FoodId, FridgeEntry, FridgeEntryUpdate, NewFridgeEntry, Quantity, Unit, UserId,
};

use super::{QUANTITY_INVALID, REQUIRED_FIELDS};
use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::state::{FormMode, ListState, LoadToken, TrackedList};

/// Form fields for adding or editing an entry. Quantity and date arrive as
/// raw input text and are validated on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FridgeForm {
    /// Catalog type picked first; the food picker narrows to it.
    pub food_type: String,
    pub food_id: Option<FoodId>,
    pub quantity: String,
    pub unit: Option<Unit>,
    pub exp_date: String,
}

/// Controller for one user's refrigerator.
///
/// Tabs are derived from the user's own entries, not the global catalog; an
/// "All" tab is always first.
#[derive(Debug)]
pub struct FridgeScreen {
    fridge: FridgeApi,
    foods: FoodsApi,
    user_id: UserId,
    entries: TrackedList<Vec<FridgeEntry>>,
    catalog: TrackedList<Vec<Food>>,
    selected: Tab,
    mode: FormMode<EntryId>,
    pub form: FridgeForm,
    banner: Option<String>,
}

impl FridgeScreen {
    #[must_use]
    pub fn new(api: &ApiClient, user_id: UserId) -> Self {
        Self {
            fridge: api.fridge(),
            foods: api.foods(),
            user_id,
            entries: TrackedList::new(),
            catalog: TrackedList::new(),
            selected: Tab::All,
            mode: FormMode::Closed,
            form: FridgeForm::default(),
            banner: None,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn entries(&self) -> &ListState<Vec<FridgeEntry>> {
        self.entries.state()
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode<EntryId> {
        self.mode
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    #[must_use]
    pub const fn selected_tab(&self) -> &Tab {
        &self.selected
    }

    /// "All" plus the distinct types among this user's entries.
    #[must_use]
    pub fn tabs(&self) -> Vec<Tab> {
        self.entries.data().map(|entries| fridge_tabs(entries)).unwrap_or_else(|| vec![Tab::All])
    }

    /// The loaded entries narrowed to the selected tab.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&FridgeEntry> {
        self.entries
            .data()
            .map(|entries| {
                entries.iter().filter(|e| self.selected.matches(e.food_type())).collect()
            })
            .unwrap_or_default()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.selected = tab;
    }

    /// Distinct types in the food catalog, for the form's type picker.
    #[must_use]
    pub fn catalog_types(&self) -> Vec<String> {
        self.catalog.data().map(|foods| food_types(foods)).unwrap_or_default()
    }

    /// Catalog foods of the form's picked type. No type picked yet means no
    /// choices; the type comes first.
    #[must_use]
    pub fn food_choices(&self) -> Vec<&Food> {
        if self.form.food_type.is_empty() {
            return Vec::new();
        }
        self.catalog
            .data()
            .map(|foods| foods_of_type(foods, &self.form.food_type))
            .unwrap_or_default()
    }

    /// Pick a type for the add form; the food selection resets with it.
    pub fn pick_form_type(&mut self, food_type: &str) {
        self.form.food_type = food_type.to_owned();
        self.form.food_id = None;
    }

    /// D-day label for one entry relative to `today`.
    #[must_use]
    pub fn expiry_display(entry: &FridgeEntry, today: NaiveDate) -> String {
        format_expiry(entry.exp_date, today)
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.entries.begin()
    }

    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<FridgeEntry>, fridgemate_client::ApiError>,
    ) {
        self.entries.finish(token, result);
    }

    /// Fetch this user's entries and apply the outcome.
    #[instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn reload(&mut self) {
        let token = self.begin_load();
        let result = self.fridge.list_for_user(self.user_id).await;
        self.finish_load(token, result);
    }

    /// Fetch the food catalog for the picker.
    #[instrument(skip(self))]
    pub async fn reload_catalog(&mut self) {
        let token = self.catalog.begin();
        let result = self.foods.list().await;
        self.catalog.finish(token, result);
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
        self.form = FridgeForm::default();
        self.banner = None;
    }

    /// Open the edit form pre-populated from `entry`.
    pub fn open_edit(&mut self, entry: &FridgeEntry) {
        self.mode = FormMode::Editing(entry.id);
        self.form = FridgeForm {
            food_type: entry.food_type().unwrap_or_default().to_owned(),
            food_id: entry.food.as_ref().map(|f| f.id),
            quantity: entry.quantity.map(|q| q.to_string()).unwrap_or_default(),
            unit: entry.unit,
            exp_date: entry.exp_date.map(|d| d.to_string()).unwrap_or_default(),
        };
        self.banner = None;
    }

    pub fn close_form(&mut self) {
        self.mode = FormMode::Closed;
        self.form = FridgeForm::default();
        self.banner = None;
    }

    fn validated(&mut self) -> Option<(Quantity, Unit, NaiveDate)> {
        let Some(unit) = self.form.unit else {
            self.banner = Some(REQUIRED_FIELDS.to_owned());
            return None;
        };
        let Ok(exp_date) = NaiveDate::from_str(self.form.exp_date.trim()) else {
            self.banner = Some(REQUIRED_FIELDS.to_owned());
            return None;
        };
        let Ok(quantity) = Quantity::from_str(self.form.quantity.trim()) else {
            self.banner = Some(QUANTITY_INVALID.to_owned());
            return None;
        };
        Some((quantity, unit, exp_date))
    }

    /// Submit the open form. On success the form closes and the list
    /// reloads; on failure the form keeps its fields and shows a banner.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> bool {
        let result = match self.mode {
            FormMode::Closed => return false,
            FormMode::Creating => {
                let Some(food_id) = self.form.food_id else {
                    self.banner = Some(REQUIRED_FIELDS.to_owned());
                    return false;
                };
                let Some((quantity, unit, exp_date)) = self.validated() else {
                    return false;
                };
                let entry = NewFridgeEntry {
                    user_id: self.user_id,
                    food_id,
                    quantity,
                    unit,
                    exp_date,
                };
                self.fridge.create(&entry).await.map(|_| ())
            }
            FormMode::Editing(id) => {
                let Some((quantity, unit, exp_date)) = self.validated() else {
                    return false;
                };
                let update = FridgeEntryUpdate {
                    quantity: Some(quantity),
                    unit: Some(unit),
                    exp_date: Some(exp_date),
                };
                self.fridge.update(id, &update).await.map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.close_form();
                self.reload().await;
                true
            }
            Err(error) => {
                self.banner = Some(error.to_string());
                false
            }
        }
    }

    /// Delete after a blocking confirmation. A declined prompt sends
    /// nothing. On success the list reloads; on failure it is left as is.
    #[instrument(skip(self, confirm))]
    pub async fn delete(&mut self, id: EntryId, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            return false;
        }
        match self.fridge.delete(id).await {
            Ok(_) => {
                self.reload().await;
                true
            }
            Err(error) => {
                self.banner = Some(error.to_string());
                false
            }
        }
    }
}
