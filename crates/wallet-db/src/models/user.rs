//! User database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the users table, password hash excluded
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub username: String,
    pub balance: Decimal,
    pub chat_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
