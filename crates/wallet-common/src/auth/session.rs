//! Session tokens
//!
//! Stateless HS256 tokens binding a username to an expiry, built on the
//! `jsonwebtoken` crate. Validity is a pure function of the signature and
//! the expiry; nothing is looked up in storage.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::AppError;

/// Session claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Get the username the session belongs to
    #[must_use]
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Check if the session is expired at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// An issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates session tokens
#[derive(Clone)]
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity_secs: i64,
}

impl SessionIssuer {
    /// Create an issuer with the given secret and validity window
    #[must_use]
    pub fn new(secret: &str, validity_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity_secs,
        }
    }

    /// Create an issuer from configuration
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.secret, config.token_expiry)
    }

    /// Validity window in seconds
    #[must_use]
    pub fn validity_secs(&self) -> i64 {
        self.validity_secs
    }

    /// Issue a token for `username` starting now
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, username: &str) -> Result<SessionToken, AppError> {
        self.issue_at(username, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_at(
        &self,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, AppError> {
        let expires_at = issued_at + Duration::seconds(self.validity_secs);
        let claims = SessionClaims {
            sub: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))?;

        Ok(SessionToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.validity_secs,
            expires_at,
        })
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    /// Returns `TokenExpired` once `exp` has passed, `InvalidToken` for anything
    /// malformed, unsigned, or signed with another key
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AppError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token against an explicit clock
    ///
    /// # Errors
    /// See [`SessionIssuer::validate`]
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiry is checked below against the supplied clock
        validation.validate_exp = false;
        validation.leeway = 0;

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        let claims = token_data.claims;
        if claims.sub.is_empty() {
            return Err(AppError::InvalidToken);
        }
        if claims.is_expired_at(now) {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("validity_secs", &self.validity_secs)
            .finish_non_exhaustive()
    }
}
