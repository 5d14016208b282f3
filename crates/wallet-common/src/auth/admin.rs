//! Shared admin secret
//!
//! Privileged ledger operations are authorized by a deployment-wide secret
//! sent in a dedicated header, never by a user session.

use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Shared secret gating admin credits and bot endpoints
#[derive(Clone)]
pub struct AdminSecret {
    secret: String,
}

impl AdminSecret {
    /// Create from the configured secret
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compare a presented secret in constant time
    #[must_use]
    pub fn matches(&self, presented: &str) -> bool {
        self.secret
            .as_bytes()
            .ct_eq(presented.as_bytes())
            .unwrap_u8()
            == 1
    }

    /// Verify a presented secret
    ///
    /// # Errors
    /// Returns `AppError::InvalidAdminSecret` on mismatch
    pub fn verify(&self, presented: &str) -> Result<(), AppError> {
        if self.matches(presented) {
            Ok(())
        } else {
            Err(AppError::InvalidAdminSecret)
        }
    }
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSecret").finish_non_exhaustive()
    }
}
