//! FridgeMate Core - Shared types library.
//!
//! This crate provides common types used across all FridgeMate components:
//! - `client` - HTTP wrappers for the refrigerator REST API
//! - `app` - Screen controllers driving the client
//! - `cli` - Command-line interface
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, quantities, units, and emails
//! - [`models`] - Wire-level entity models (users, foods, fridge entries, recipes)
//! - [`views`] - Derived-view functions computed from already-fetched collections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;
pub mod views;

pub use models::*;
pub use types::*;
