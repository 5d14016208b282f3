//! Pending intent - the last method/amount a chat stated before sending a receipt

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ephemeral, one per chat, last write wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingIntent {
    pub chat_id: i64,
    pub method: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl PendingIntent {
    pub fn new(chat_id: i64, method: impl Into<String>, amount: Decimal) -> Self {
        Self {
            chat_id,
            method: method.into(),
            amount,
            created_at: Utc::now(),
        }
    }
}
