//! Newtype wrappers for type safety.

mod email;
mod id;
mod quantity;
mod unit;

pub use email::{Email, EmailError};
pub use id::{EntryId, FoodId, RecipeSeq, UserId};
pub use quantity::{Quantity, QuantityError};
pub use unit::{Unit, UnitError};
