//! FridgeMate API client library.
//!
//! One wrapper per resource (auth, users, foods, fridge entries, recipes),
//! each mapping a CRUD verb to an HTTP call and normalizing non-success
//! responses into a uniform failure with a fixed per-operation message.
//!
//! # Example
//!
//! ```rust,ignore
//! use fridgemate_client::{ApiClient, ClientConfig};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! let foods = client.foods().list().await?;
//! let entries = client.fridge().list_for_user(user_id).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use api::{ApiClient, AuthApi, FoodsApi, FridgeApi, RecipesApi, UploadedImage, UsersApi};
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use session::{CurrentUser, FileStore, MemoryStore, Session, SessionError, SessionStore};
