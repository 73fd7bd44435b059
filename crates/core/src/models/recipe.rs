//! Recipe model.
//!
//! Recipes come from an external source and are read-only here. Instruction
//! steps arrive as up to 20 zero-padded field pairs (`manual01`/`manualImg01`
//! through `manual20`/`manualImg20`); those are captured through a flattened
//! map and surfaced through [`Recipe::manual`]/[`Recipe::manual_img`] so the
//! derived-view layer can assemble them in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::RecipeSeq;

/// Highest instruction step number a recipe can carry.
pub const MAX_MANUAL_STEPS: u8 = 20;

/// An externally supplied recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(rename = "rcpSeq")]
    pub rcp_seq: RecipeSeq,
    #[serde(rename = "rcpNm")]
    pub name: String,
    /// Category, e.g. "반찬".
    #[serde(default, rename = "rcpPat2", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cooking method, e.g. "끓이기".
    #[serde(default, rename = "rcpWay2", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, rename = "hashTag", skip_serializing_if = "Option::is_none")]
    pub hash_tag: Option<String>,
    /// Ingredient details as free text.
    #[serde(default, rename = "rcpPartsDtls", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Low-sodium cooking tip.
    #[serde(default, rename = "rcpNaTip", skip_serializing_if = "Option::is_none")]
    pub sodium_tip: Option<String>,
    /// Serving size text, e.g. "100g".
    #[serde(default, rename = "infoWgt", skip_serializing_if = "Option::is_none")]
    pub serving_weight: Option<String>,
    /// Energy (kcal).
    #[serde(default, rename = "infoEng", skip_serializing_if = "Option::is_none")]
    pub energy: Option<String>,
    /// Carbohydrate (g).
    #[serde(default, rename = "infoCar", skip_serializing_if = "Option::is_none")]
    pub carbohydrate: Option<String>,
    /// Protein (g).
    #[serde(default, rename = "infoPro", skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    /// Fat (g).
    #[serde(default, rename = "infoFat", skip_serializing_if = "Option::is_none")]
    pub fat: Option<String>,
    /// Sodium (mg).
    #[serde(default, rename = "infoNa", skip_serializing_if = "Option::is_none")]
    pub sodium: Option<String>,
    /// Main (card) image URL.
    #[serde(default, rename = "attFileNoMain", skip_serializing_if = "Option::is_none")]
    pub image_main: Option<String>,
    /// Detail image URL.
    #[serde(default, rename = "attFileNoMk", skip_serializing_if = "Option::is_none")]
    pub image_detail: Option<String>,
    /// The zero-padded `manualNN`/`manualImgNN` step fields.
    #[serde(flatten)]
    pub manuals: BTreeMap<String, Value>,
}

impl Recipe {
    /// Instruction text for step `n` (1-based), if the field is present and
    /// is a string.
    #[must_use]
    pub fn manual(&self, n: u8) -> Option<&str> {
        self.manuals.get(&format!("manual{n:02}")).and_then(Value::as_str)
    }

    /// Instruction image URL for step `n` (1-based).
    #[must_use]
    pub fn manual_img(&self, n: u8) -> Option<&str> {
        self.manuals.get(&format!("manualImg{n:02}")).and_then(Value::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_wire_names() {
        let json = r#"{
            "rcpSeq": 28,
            "rcpNm": "김치찌개",
            "rcpPat2": "국&찌개",
            "rcpWay2": "끓이기",
            "infoEng": "310",
            "manual01": "김치를 썬다.",
            "manualImg01": "http://example.com/step1.jpg",
            "manual03": "끓인다."
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.rcp_seq, RecipeSeq::new(28));
        assert_eq!(recipe.energy.as_deref(), Some("310"));
        assert_eq!(recipe.manual(1), Some("김치를 썬다."));
        assert_eq!(recipe.manual_img(1), Some("http://example.com/step1.jpg"));
        assert_eq!(recipe.manual(2), None);
        assert_eq!(recipe.manual(3), Some("끓인다."));
    }
}
