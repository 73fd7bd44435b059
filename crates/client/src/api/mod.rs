//! HTTP client wrappers, one module per resource.
//!
//! # Contract
//!
//! Each function builds its URL from the configured base, issues exactly one
//! request (no retries, no deduplication, no caching) and normalizes any
//! non-success status into [`ApiError::Api`] with a fixed message for that
//! resource/verb. Delete operations return a boolean success flag derived
//! from the HTTP status; everything else returns the parsed JSON body.

mod auth;
mod foods;
mod fridge;
mod recipes;
mod users;

use std::sync::Arc;

use serde::de::DeserializeOwned;

pub use auth::{AuthApi, LoginResponse};
pub use foods::{FoodsApi, UploadedImage};
pub use fridge::FridgeApi;
pub use recipes::RecipesApi;
pub use users::UsersApi;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Client for the FridgeMate REST API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Auth operations.
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// User CRUD operations.
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Food catalog CRUD and image upload.
    #[must_use]
    pub fn foods(&self) -> FoodsApi {
        FoodsApi::new(self.clone())
    }

    /// Refrigerator entry operations.
    #[must_use]
    pub fn fridge(&self) -> FridgeApi {
        FridgeApi::new(self.clone())
    }

    /// Read-only recipe operations.
    #[must_use]
    pub fn recipes(&self) -> RecipesApi {
        RecipesApi::new(self.clone())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }
}

/// Map a non-success status to the operation's fixed failure message, then
/// decode the JSON body.
pub(crate) async fn expect_json<T: DeserializeOwned>(
    response: reqwest::Response,
    failure: &str,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Api(failure.to_owned()));
    }
    response.json().await.map_err(|e| ApiError::response(&e))
}

/// Map a non-success status on a delete to the fixed failure message; a
/// success status becomes the boolean flag the caller reports.
pub(crate) fn expect_deleted(response: &reqwest::Response, failure: &str) -> Result<bool, ApiError> {
    if response.status().is_success() {
        Ok(true)
    } else {
        Err(ApiError::Api(failure.to_owned()))
    }
}
