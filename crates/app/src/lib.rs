//! Screen controllers and view state for the FridgeMate client.
//!
//! Each screen is a small state machine owning one tracked list plus a form
//! sub-state. Network calls go through `fridgemate-client`; failures never
//! escape a screen — they land in the list state or an inline banner and the
//! user retries.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod confirm;
pub mod screens;
pub mod state;

pub use confirm::{AcceptAll, Confirm, DELETE_PROMPT, DeclineAll};
pub use state::{FormMode, ListState, LoadSequencer, LoadToken, TrackedList};
