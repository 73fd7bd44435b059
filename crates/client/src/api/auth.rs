//! Login wrapper.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use fridgemate_core::User;

use super::ApiClient;
use crate::error::ApiError;

/// Default message when the server does not provide one.
const LOGIN_FAILED: &str = "로그인에 실패했습니다.";

/// Login response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Success flag; a `false` here fails the login even on a 2xx status.
    pub success: bool,
    /// Server-provided failure message, forwarded verbatim when present.
    #[serde(default)]
    pub message: Option<String>,
    /// Identity to persist for the session.
    #[serde(default)]
    pub user: Option<User>,
}

/// Auth operations.
///
/// Only login talks to the server; logout is a local session operation and
/// lives on [`Session`](crate::session::Session).
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in with email and password.
    ///
    /// Fails when the HTTP status is non-success OR the body's success flag
    /// is false; in both cases the server's message is forwarded when
    /// present, the fixed default otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Login`] on rejected credentials, and the usual
    /// transport/decoding variants otherwise.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<User, ApiError> {
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let response = self
            .client
            .http()
            .post(self.client.url("/api/auth/login"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;

        let status = response.status();
        let payload = response.json::<LoginResponse>().await.ok();

        match payload {
            Some(payload) if status.is_success() && payload.success => {
                debug!("login succeeded");
                payload
                    .user
                    .ok_or_else(|| ApiError::Response("login payload missing user".to_owned()))
            }
            payload => Err(ApiError::Login(
                payload
                    .and_then(|p| p.message)
                    .unwrap_or_else(|| LOGIN_FAILED.to_owned()),
            )),
        }
    }
}
