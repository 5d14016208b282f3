//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. Field-level rules
//! here only bound sizes; domain rules (trimming, positive amounts, method
//! normalization) are enforced by the value objects in the services.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Identity Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

// ============================================================================
// Ledger Requests
// ============================================================================

/// User-initiated recharge request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RechargeRequest {
    #[validate(length(min = 1, max = 32, message = "Method must be 1-32 characters"))]
    pub method: String,

    pub amount: Decimal,
}

/// Privileged credit, authorized by the admin secret
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreditRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    pub amount: Decimal,

    /// Payment channel, `YAPE` when omitted
    #[validate(length(max = 32, message = "Method must be at most 32 characters"))]
    pub method: Option<String>,

    /// Approving actor, `admin` when omitted
    #[validate(length(max = 64, message = "Admin must be at most 64 characters"))]
    pub admin: Option<String>,
}

/// Transaction history query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

// ============================================================================
// Bot Requests
// ============================================================================

/// Bind a chat to a registered user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LinkChatRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    pub chat_id: i64,
}

/// Record the method/amount a chat declared
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PendingIntentRequest {
    pub chat_id: i64,

    #[validate(length(max = 32, message = "Method must be at most 32 characters"))]
    pub method: Option<String>,

    pub amount: Decimal,
}

/// Report a receipt for the chat's pending intent
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProofRequest {
    pub chat_id: i64,

    #[validate(length(min = 1, max = 256, message = "File id must be 1-256 characters"))]
    pub file_id: String,
}
