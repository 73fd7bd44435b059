//! User CRUD wrappers.

use secrecy::ExposeSecret;
use serde_json::json;
use tracing::instrument;

use fridgemate_core::{NewUser, User, UserId, UserUpdate};

use super::{ApiClient, expect_deleted, expect_json};
use crate::error::ApiError;

const LIST_FAILED: &str = "유저 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "유저를 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "유저 생성에 실패했습니다.";
const UPDATE_FAILED: &str = "유저 수정에 실패했습니다.";
const DELETE_FAILED: &str = "유저 삭제에 실패했습니다.";

/// User CRUD operations.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all users.
    ///
    /// # Errors
    ///
    /// Returns the fixed list failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url("/api/users"))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, LIST_FAILED).await
    }

    /// Fetch one user by ID.
    ///
    /// # Errors
    ///
    /// Returns the fixed fetch failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> Result<User, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/api/users/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, FETCH_FAILED).await
    }

    /// Create a user. The password crosses the wire here and never comes
    /// back.
    ///
    /// # Errors
    ///
    /// Returns the fixed creation failure on a non-success status.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let body = json!({
            "name": user.name,
            "email": user.email,
            "phone_number": user.phone_number,
            "password": user.password.expose_secret(),
        });

        let response = self
            .client
            .http()
            .post(self.client.url("/api/users"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, CREATE_FAILED).await
    }

    /// Update a user. Email is immutable and absent from the payload; a
    /// `None` password leaves the stored one untouched.
    ///
    /// # Errors
    ///
    /// Returns the fixed update failure on a non-success status.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: UserId, update: &UserUpdate) -> Result<User, ApiError> {
        let mut body = json!({
            "name": update.name,
            "phone_number": update.phone_number,
        });
        if let (Some(password), Some(map)) = (&update.password, body.as_object_mut()) {
            map.insert("password".to_owned(), json!(password.expose_secret()));
        }

        let response = self
            .client
            .http()
            .put(self.client.url(&format!("/api/users/{id}")))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, UPDATE_FAILED).await
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns the fixed deletion failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<bool, ApiError> {
        let response = self
            .client
            .http()
            .delete(self.client.url(&format!("/api/users/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_deleted(&response, DELETE_FAILED)
    }
}
