//! Derived views: data computed purely from already-fetched collections.
//!
//! Nothing in this module performs I/O. Every function takes collections the
//! client has already fetched and derives what a screen renders from them:
//! type tab sets, type-filtered lists, expiry countdowns, and assembled
//! recipe instructions.

mod expiry;
mod steps;
mod types;

pub use expiry::{ExpiryLabel, MISSING_DATE, days_until, expiry_label, format_expiry};
pub use steps::{InstructionStep, instruction_steps};
pub use types::{Tab, distinct_types, entry_types, filter_by_type, food_types, foods_of_type, fridge_tabs};
