//! Amount - a strictly positive monetary value
//!
//! Amounts are stored as `NUMERIC(14, 2)`, so at most two decimal places
//! and twelve integer digits are accepted.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::DomainError;

/// Maximum number of fractional digits
const MAX_SCALE: u32 = 2;

/// Exclusive upper bound (12 integer digits)
const UPPER_BOUND: i64 = 1_000_000_000_000;

/// A validated, strictly positive monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Validate a raw decimal as a credit/request amount
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount(format!(
                "amount must be greater than zero, got {value}"
            )));
        }

        let normalized = value.normalize();
        if normalized.scale() > MAX_SCALE {
            return Err(DomainError::InvalidAmount(format!(
                "amount must have at most {MAX_SCALE} decimal places, got {value}"
            )));
        }

        if normalized >= Decimal::from(UPPER_BOUND) {
            return Err(DomainError::InvalidAmount(format!(
                "amount exceeds the maximum of {UPPER_BOUND}"
            )));
        }

        Ok(Self(normalized))
    }

    /// Get the inner decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::InvalidAmount(format!("not a number: {s}")))?;
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amounts_accepted() {
        assert_eq!(Amount::new(Decimal::from(50)).unwrap().value(), Decimal::from(50));
        assert_eq!(
            Amount::new(Decimal::new(1999, 2)).unwrap().value(),
            Decimal::new(1999, 2)
        );
        assert_eq!(Amount::new(Decimal::new(1, 2)).unwrap().value(), Decimal::new(1, 2));
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(matches!(
            Amount::new(Decimal::ZERO),
            Err(DomainError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::new(Decimal::from(-10)),
            Err(DomainError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_too_many_decimal_places_rejected() {
        assert!(Amount::new(Decimal::new(1001, 3)).is_err());
        // Trailing zeros are not significant
        assert!(Amount::new(Decimal::new(10_500, 3)).is_ok());
    }

    #[test]
    fn test_upper_bound() {
        assert!(Amount::new(Decimal::from(UPPER_BOUND)).is_err());
        assert!(Amount::new(Decimal::from(UPPER_BOUND - 1)).is_ok());
    }

    #[test]
    fn test_from_str() {
        let amount: Amount = " 25.50 ".parse().unwrap();
        assert_eq!(amount.value(), Decimal::new(255, 1));
        assert!("abc".parse::<Amount>().is_err());
        assert!("-1".parse::<Amount>().is_err());
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let amount = Amount::new(Decimal::new(2550, 2)).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"25.50\"");
    }
}
