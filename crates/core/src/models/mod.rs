//! Wire-level entity models.
//!
//! Field names mirror the REST API exactly, including its mixed spellings
//! (`phone_number` next to `createdAt`, `expDate` on write vs `exp_date` on
//! read). Normalizing them here would break round-trips with the live
//! backend, so the models carry explicit `rename`/`alias` attributes instead.

mod food;
mod fridge;
mod recipe;
mod user;

pub use food::{Food, NewFood};
pub use fridge::{FridgeEntry, FridgeEntryUpdate, NewFridgeEntry};
pub use recipe::{MAX_MANUAL_STEPS, Recipe};
pub use user::{NewUser, User, UserUpdate};
