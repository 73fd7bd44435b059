//! Read-only recipe wrappers. Recipes come from an external food-safety
//! dataset and are never written through this client.

use tracing::instrument;

use fridgemate_core::{Recipe, RecipeSeq, UserId};

use super::{ApiClient, expect_json};
use crate::error::ApiError;

const LIST_FAILED: &str = "레시피 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "레시피 상세 정보를 불러오는데 실패했습니다.";
const SEARCH_FAILED: &str = "레시피 검색에 실패했습니다.";

/// Recipe listing, detail and search.
#[derive(Debug, Clone)]
pub struct RecipesApi {
    client: ApiClient,
}

impl RecipesApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of recipes. When `user_id` is given the server sorts
    /// recipes matching that user's fridge contents first.
    ///
    /// # Errors
    ///
    /// Returns the fixed list failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: u32,
        size: u32,
        user_id: Option<UserId>,
    ) -> Result<Vec<Recipe>, ApiError> {
        let mut request = self
            .client
            .http()
            .get(self.client.url("/api/recipes"))
            .query(&[("page", page), ("size", size)]);
        if let Some(user_id) = user_id {
            request = request.query(&[("userId", user_id)]);
        }
        let response = request.send().await.map_err(|e| ApiError::request(&e))?;
        expect_json(response, LIST_FAILED).await
    }

    /// Fetch one recipe by its dataset sequence number.
    ///
    /// # Errors
    ///
    /// Returns the fixed detail failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn get(&self, seq: RecipeSeq) -> Result<Recipe, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/api/recipes/{seq}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, FETCH_FAILED).await
    }

    /// Search recipes by name substring.
    ///
    /// # Errors
    ///
    /// Returns the fixed search failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn search(&self, name: &str) -> Result<Vec<Recipe>, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url("/api/recipes/search"))
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, SEARCH_FAILED).await
    }
}
