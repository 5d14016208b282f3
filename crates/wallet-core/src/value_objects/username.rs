//! Username value object

use std::fmt;

use crate::error::DomainError;

/// Maximum username length in characters
const MAX_LEN: usize = 64;

/// A trimmed, non-empty username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parse a raw username, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUsername(
                "username must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_LEN {
            return Err(DomainError::InvalidUsername(format!(
                "username must be at most {MAX_LEN} characters"
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(DomainError::InvalidUsername(
                "username must not contain control characters".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
