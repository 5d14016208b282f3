//! Transaction database models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the transactions table
#[derive(Debug, Clone, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub username: String,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub proof_file_id: Option<String>,
    pub admin: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate row produced by the reconciliation query
#[derive(Debug, Clone, FromRow)]
pub struct ReconciliationModel {
    pub username: String,
    pub balance: Decimal,
    pub credited_total: Decimal,
    pub credited_count: i64,
}
