//! Refrigerator entry model and request payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Food;
use crate::types::{EntryId, FoodId, Quantity, Unit, UserId};

/// One item a user currently has in stock: a (user, food, quantity, unit,
/// expiration date) record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FridgeEntry {
    pub id: EntryId,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Denormalized snapshot of the referenced food, taken when the entry
    /// was written. It is NOT refreshed when the catalog food changes; the
    /// list renders a placeholder when it is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<Food>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    /// Calendar date, no time component. The backend writes this field as
    /// `exp_date` while accepting `expDate` on create.
    #[serde(
        default,
        rename = "exp_date",
        alias = "expDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp_date: Option<NaiveDate>,
}

impl FridgeEntry {
    /// Type of the embedded food snapshot, if any.
    #[must_use]
    pub fn food_type(&self) -> Option<&str> {
        self.food
            .as_ref()
            .and_then(|f| f.food_type.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Name of the embedded food for display, `"-"` when the snapshot is gone.
    #[must_use]
    pub fn food_name_display(&self) -> &str {
        self.food.as_ref().map_or("-", |f| f.name.as_str())
    }

    /// Type of the embedded food for display, `"-"` when absent.
    #[must_use]
    pub fn food_type_display(&self) -> &str {
        self.food_type().unwrap_or("-")
    }
}

/// Payload for adding a food to a refrigerator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewFridgeEntry {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "foodId")]
    pub food_id: FoodId,
    pub quantity: Quantity,
    pub unit: Unit,
    #[serde(rename = "expDate")]
    pub exp_date: NaiveDate,
}

/// Payload for updating an entry; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct FridgeEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(rename = "expDate", skip_serializing_if = "Option::is_none")]
    pub exp_date: Option<NaiveDate>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accepts_both_date_spellings() {
        let snake: FridgeEntry =
            serde_json::from_str(r#"{"id": 1, "exp_date": "2024-06-01"}"#).unwrap();
        let camel: FridgeEntry =
            serde_json::from_str(r#"{"id": 1, "expDate": "2024-06-01"}"#).unwrap();
        assert_eq!(snake.exp_date, camel.exp_date);
        assert_eq!(
            snake.exp_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
    }

    #[test]
    fn test_missing_snapshot_renders_placeholders() {
        let entry: FridgeEntry = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(entry.food_name_display(), "-");
        assert_eq!(entry.food_type_display(), "-");
        assert!(entry.food_type().is_none());
    }

    #[test]
    fn test_new_entry_wire_shape() {
        let payload = NewFridgeEntry {
            user_id: UserId::new(1),
            food_id: FoodId::new(5),
            quantity: "2".parse().unwrap(),
            unit: Unit::Piece,
            exp_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 1,
                "foodId": 5,
                "quantity": 2.0,
                "unit": "개",
                "expDate": "2024-06-01"
            })
        );
    }
}
