//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No pending intent for chat {0}")]
    PendingIntentNotFound(i64),

    #[error("Chat {0} is not bound to any user")]
    ChatNotBound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Chat {0} is already bound to another user")]
    ChatAlreadyBound(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PendingIntentNotFound(_) => "NO_PENDING_INTENT",
            Self::ChatNotBound(_) => "CHAT_NOT_BOUND",

            // Validation
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidMethod(_) => "INVALID_METHOD",

            // Conflict
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::ChatAlreadyBound(_) => "CHAT_ALREADY_BOUND",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UserNotFound(_) | Self::PendingIntentNotFound(_) | Self::ChatNotBound(_) => 404,
            Self::InvalidUsername(_) | Self::InvalidAmount(_) | Self::InvalidMethod(_) => 400,
            Self::UsernameTaken(_) | Self::ChatAlreadyBound(_) => 409,
            Self::DatabaseError(_) | Self::CacheError(_) => 503,
            Self::InternalError(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound("ghost".to_string());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::InvalidAmount("zero".to_string());
        assert_eq!(err.code(), "INVALID_AMOUNT");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::UserNotFound("ghost".to_string()).status_code(), 404);
        assert_eq!(DomainError::ChatNotBound(1).status_code(), 404);
        assert_eq!(DomainError::PendingIntentNotFound(1).status_code(), 404);
        assert_eq!(DomainError::InvalidAmount("x".to_string()).status_code(), 400);
        assert_eq!(DomainError::InvalidMethod("x".to_string()).status_code(), 400);
        assert_eq!(DomainError::UsernameTaken("ana".to_string()).status_code(), 409);
        assert_eq!(DomainError::ChatAlreadyBound(7).status_code(), 409);
        assert_eq!(DomainError::InternalError("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_store_failures_are_not_client_errors() {
        let err = DomainError::DatabaseError("connection refused".to_string());
        assert_eq!(err.status_code(), 503);
        assert_eq!(DomainError::CacheError("down".to_string()).status_code(), 503);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound("ghost".to_string());
        assert_eq!(err.to_string(), "User not found: ghost");

        let err = DomainError::ChatAlreadyBound(99);
        assert_eq!(err.to_string(), "Chat 99 is already bound to another user");
    }
}
