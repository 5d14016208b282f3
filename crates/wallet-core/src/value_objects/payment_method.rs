//! Payment method tag (e.g. `YAPE`, `PLIN`)

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::DomainError;

/// Maximum length of a method tag
const MAX_LEN: usize = 32;

/// Normalized payment channel tag: trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    /// Method used when an admin credit does not name one
    pub const DEFAULT: &'static str = "YAPE";

    /// Parse and normalize a caller-supplied method tag
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidMethod("method must not be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_LEN {
            return Err(DomainError::InvalidMethod(format!(
                "method must be at most {MAX_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Parse an optional tag, falling back to [`PaymentMethod::DEFAULT`]
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::parse(value),
            _ => Ok(Self::default()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
