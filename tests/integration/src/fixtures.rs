//! Test fixtures and data generators
//!
//! Request bodies the tests send and the response shapes they read back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Username that no other test run will collide with
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4().simple())
}

/// Registration and login body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            username: unique_username("user"),
            password: "pw1".to_string(),
        }
    }
}

/// Privileged credit body
#[derive(Debug, Serialize)]
pub struct CreditRequest {
    pub username: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl CreditRequest {
    pub fn new(username: &str, amount: Decimal) -> Self {
        Self {
            username: username.to_string(),
            amount,
            method: None,
        }
    }
}

/// Recharge request body
#[derive(Debug, Serialize)]
pub struct RechargeRequest {
    pub method: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    pub username: String,
    pub balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub username: String,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub admin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreditResponse {
    pub username: String,
    pub new_balance: Decimal,
    pub transaction: TransactionResponse,
}

#[derive(Debug, Deserialize)]
pub struct RechargeResponse {
    pub transaction: TransactionResponse,
    pub notified: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReconciliationResponse {
    pub balance: Decimal,
    pub credited_total: Decimal,
    pub credited_count: i64,
    pub consistent: bool,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
