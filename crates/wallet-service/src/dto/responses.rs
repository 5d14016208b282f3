//! Response DTOs for API endpoints
//!
//! Monetary values serialize as decimal strings so no precision is lost in
//! transit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use wallet_core::entities::TransactionStatus;

// ============================================================================
// Identity Responses
// ============================================================================

/// A registered user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}

/// Chat binding state after a link call
#[derive(Debug, Clone, Serialize)]
pub struct ChatBindingResponse {
    pub username: String,
    pub chat_id: i64,
    /// False when the user already had a binding, which was kept
    pub newly_bound: bool,
}

// ============================================================================
// Ledger Responses
// ============================================================================

/// Current balance
#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    pub username: String,
    pub balance: Decimal,
}

/// A row of the transaction log
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub username: String,
    pub amount: Decimal,
    pub method: String,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of a privileged credit
#[derive(Debug, Clone, Serialize)]
pub struct CreditResponse {
    pub username: String,
    pub new_balance: Decimal,
    pub transaction: TransactionResponse,
}

/// Result of a recharge request
#[derive(Debug, Clone, Serialize)]
pub struct RechargeResponse {
    pub transaction: TransactionResponse,
    /// Whether the chat notification was delivered
    pub notified: bool,
}

/// Balance vs. credited-row audit
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationResponse {
    pub username: String,
    pub balance: Decimal,
    pub credited_total: Decimal,
    pub credited_count: i64,
    pub consistent: bool,
}

// ============================================================================
// Bot Responses
// ============================================================================

/// The intent currently stored for a chat
#[derive(Debug, Clone, Serialize)]
pub struct PendingIntentResponse {
    pub chat_id: i64,
    pub method: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let label = |healthy: bool| if healthy { "healthy" } else { "unhealthy" }.to_string();
        Self {
            status: if database_healthy && redis_healthy {
                "ready"
            } else {
                "not_ready"
            }
            .to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label(database_healthy),
                redis: label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_response_serialization() {
        let response = TransactionResponse {
            id: 1,
            username: "ana".to_string(),
            amount: Decimal::new(5000, 2),
            method: "YAPE".to_string(),
            status: TransactionStatus::Requested,
            proof_file_id: None,
            admin: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["amount"], "50.00");
        assert_eq!(json["status"], "requested");
        assert!(json.get("proof_file_id").is_none());
        assert!(json.get("admin").is_none());
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(true, false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.redis, "unhealthy");
    }
}
