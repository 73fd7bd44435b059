//! Fridge inventory wrappers over the `userRefs` endpoints.

use tracing::instrument;

use fridgemate_core::{EntryId, FridgeEntry, FridgeEntryUpdate, NewFridgeEntry, UserId};

use super::{ApiClient, expect_deleted, expect_json};
use crate::error::ApiError;

const LIST_FAILED: &str = "냉장고 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "냉장고 정보를 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "음식 추가에 실패했습니다.";
const UPDATE_FAILED: &str = "냉장고 수정에 실패했습니다.";
const DELETE_FAILED: &str = "음식 삭제에 실패했습니다.";

/// Fridge inventory CRUD.
#[derive(Debug, Clone)]
pub struct FridgeApi {
    client: ApiClient,
}

impl FridgeApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every entry across all users.
    ///
    /// # Errors
    ///
    /// Returns the fixed list failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<FridgeEntry>, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url("/api/userRefs"))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, LIST_FAILED).await
    }

    /// Fetch one user's entries.
    ///
    /// # Errors
    ///
    /// Returns the fixed list failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<FridgeEntry>, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/api/userRefs/user/{user_id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, LIST_FAILED).await
    }

    /// Fetch one entry by ID.
    ///
    /// # Errors
    ///
    /// Returns the fixed fetch failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn get(&self, id: EntryId) -> Result<FridgeEntry, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/api/userRefs/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, FETCH_FAILED).await
    }

    /// Put a food into the fridge.
    ///
    /// # Errors
    ///
    /// Returns the fixed creation failure on a non-success status.
    #[instrument(skip(self, entry), fields(user_id = %entry.user_id, food_id = %entry.food_id))]
    pub async fn create(&self, entry: &NewFridgeEntry) -> Result<FridgeEntry, ApiError> {
        let response = self
            .client
            .http()
            .post(self.client.url("/api/userRefs"))
            .json(entry)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, CREATE_FAILED).await
    }

    /// Update an entry's quantity, unit or expiry date.
    ///
    /// # Errors
    ///
    /// Returns the fixed update failure on a non-success status.
    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        id: EntryId,
        update: &FridgeEntryUpdate,
    ) -> Result<FridgeEntry, ApiError> {
        let response = self
            .client
            .http()
            .put(self.client.url(&format!("/api/userRefs/{id}")))
            .json(update)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, UPDATE_FAILED).await
    }

    /// Take an entry out of the fridge.
    ///
    /// # Errors
    ///
    /// Returns the fixed deletion failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntryId) -> Result<bool, ApiError> {
        let response = self
            .client
            .http()
            .delete(self.client.url(&format!("/api/userRefs/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_deleted(&response, DELETE_FAILED)
    }
}
