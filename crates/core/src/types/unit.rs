//! Measurement unit for refrigerator entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a [`Unit`] from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown unit: {0}")]
pub struct UnitError(pub String);

/// Measurement unit for a refrigerator entry quantity.
///
/// A fixed, closed vocabulary. The wire representation is the Korean label
/// used by the API (`"개"`, `"g"`, `"kg"`, `"ml"`, `"L"`, `"봉"`, `"팩"`,
/// `"병"`); a value outside the vocabulary fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// 개 - piece
    #[serde(rename = "개")]
    Piece,
    /// g - gram
    #[serde(rename = "g")]
    Gram,
    /// kg - kilogram
    #[serde(rename = "kg")]
    Kilogram,
    /// ml - milliliter
    #[serde(rename = "ml")]
    Milliliter,
    /// L - liter
    #[serde(rename = "L")]
    Liter,
    /// 봉 - bag
    #[serde(rename = "봉")]
    Bag,
    /// 팩 - pack
    #[serde(rename = "팩")]
    Pack,
    /// 병 - bottle
    #[serde(rename = "병")]
    Bottle,
}

impl Unit {
    /// All units, in the order the entry form offers them.
    pub const ALL: [Self; 8] = [
        Self::Piece,
        Self::Gram,
        Self::Kilogram,
        Self::Milliliter,
        Self::Liter,
        Self::Bag,
        Self::Pack,
        Self::Bottle,
    ];

    /// The wire label for this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Piece => "개",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Milliliter => "ml",
            Self::Liter => "L",
            Self::Bag => "봉",
            Self::Pack => "팩",
            Self::Bottle => "병",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = UnitError;

    /// Accepts the wire label or an English alias (for CLI input).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "개" | "piece" => Ok(Self::Piece),
            "g" | "gram" => Ok(Self::Gram),
            "kg" | "kilogram" => Ok(Self::Kilogram),
            "ml" | "milliliter" => Ok(Self::Milliliter),
            "L" | "l" | "liter" => Ok(Self::Liter),
            "봉" | "bag" => Ok(Self::Bag),
            "팩" | "pack" => Ok(Self::Pack),
            "병" | "bottle" => Ok(Self::Bottle),
            other => Err(UnitError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels_roundtrip() {
        for unit in Unit::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            let parsed: Unit = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn test_serializes_to_korean_label() {
        assert_eq!(serde_json::to_string(&Unit::Piece).unwrap(), "\"개\"");
        assert_eq!(serde_json::to_string(&Unit::Liter).unwrap(), "\"L\"");
    }

    #[test]
    fn test_out_of_vocabulary_rejected() {
        assert!(serde_json::from_str::<Unit>("\"oz\"").is_err());
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("개".parse::<Unit>().unwrap(), Unit::Piece);
        assert_eq!("bottle".parse::<Unit>().unwrap(), Unit::Bottle);
        assert!("oz".parse::<Unit>().is_err());
    }
}
