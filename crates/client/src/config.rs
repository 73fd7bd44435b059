//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FRIDGEMATE_API_BASE_URL` - API base URL (default: `http://localhost:8080`)
//! - `API_BASE_URL` - Fallback for the above
//! - `FRIDGEMATE_SESSION_FILE` - Path of the persisted session file
//!   (default: `.fridgemate/session.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default API base URL when no environment override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default path of the persisted session file.
const DEFAULT_SESSION_FILE: &str = ".fridgemate/session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Where the session (current user + authenticated flag) is persisted.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL override is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_optional_env("FRIDGEMATE_API_BASE_URL")
            .or_else(|| get_optional_env("API_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("FRIDGEMATE_API_BASE_URL".to_owned(), e.to_string())
        })?;

        let session_file = get_env_or_default("FRIDGEMATE_SESSION_FILE", DEFAULT_SESSION_FILE);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            session_file: PathBuf::from(session_file),
        })
    }

    /// Build a configuration pointing at an explicit base URL (used by tests
    /// and by the mock-server harness).
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
