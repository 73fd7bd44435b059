//! Food catalog model and request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::FoodId;

/// A catalog food as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    pub id: FoodId,
    #[serde(rename = "foodName")]
    pub name: String,
    /// Free-text category. Not an enum: the set of available types is
    /// whatever distinct values currently exist in the collection.
    #[serde(default, rename = "foodType", skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    /// Server-assigned reference path from the image upload endpoint.
    #[serde(default, rename = "foodImageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Food {
    /// Category for display, `"-"` when absent or blank.
    #[must_use]
    pub fn type_display(&self) -> &str {
        self.food_type.as_deref().filter(|t| !t.is_empty()).unwrap_or("-")
    }
}

/// Payload for creating or updating a food.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewFood {
    #[serde(rename = "foodName")]
    pub name: String,
    #[serde(rename = "foodType", skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    #[serde(rename = "foodImageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_food_wire_names() {
        let json = r#"{
            "id": 5,
            "foodName": "김치",
            "foodType": "반찬",
            "foodImageUrl": "/images/kimchi.jpg"
        }"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.name, "김치");
        assert_eq!(food.food_type.as_deref(), Some("반찬"));
        assert_eq!(food.type_display(), "반찬");
    }

    #[test]
    fn test_type_display_placeholder() {
        let json = r#"{"id": 6, "foodName": "김치"}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.type_display(), "-");

        let json = r#"{"id": 7, "foodName": "김치", "foodType": ""}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.type_display(), "-");
    }

    #[test]
    fn test_new_food_omits_absent_fields() {
        let payload = NewFood {
            name: "김치".to_owned(),
            food_type: None,
            image_url: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"foodName": "김치"}));
    }
}
