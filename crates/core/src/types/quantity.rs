//! Positive decimal quantity for refrigerator entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero or negative.
    #[error("quantity must be positive (got {0})")]
    NotPositive(Decimal),
    /// The input string is not a decimal number.
    #[error("quantity is not a number: {0}")]
    NotANumber(String),
}

/// A strictly positive decimal quantity.
///
/// Serialized as a plain JSON number. Deserialization enforces positivity,
/// so a zero or negative quantity never enters the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] if the value is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, QuantityError> {
        if value <= Decimal::ZERO {
            return Err(QuantityError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|_| QuantityError::NotANumber(s.to_owned()))?;
        Self::new(value)
    }
}

impl Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Emit a JSON number, not rust_decimal's default string form
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(matches!(
            Quantity::new(Decimal::ZERO),
            Err(QuantityError::NotPositive(_))
        ));
        assert!(Quantity::new(Decimal::new(-15, 1)).is_err());
    }

    #[test]
    fn test_from_str() {
        let q: Quantity = "1.5".parse().unwrap();
        assert_eq!(q.get(), Decimal::new(15, 1));
        assert!(matches!(
            "abc".parse::<Quantity>(),
            Err(QuantityError::NotANumber(_))
        ));
        assert!("0".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let q: Quantity = "2".parse().unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "2.0");
    }

    #[test]
    fn test_deserialize_rejects_nonpositive() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-3").is_err());
        let q: Quantity = serde_json::from_str("0.5").unwrap();
        assert_eq!(q.get(), Decimal::new(5, 1));
    }
}
