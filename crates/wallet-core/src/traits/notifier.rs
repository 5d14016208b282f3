//! Outbound chat notifications

use async_trait::async_trait;
use thiserror::Error;

/// Why a notification was not delivered
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notifications are not configured")]
    Disabled,

    #[error("Notification timed out")]
    Timeout,

    #[error("Notification rejected with status {0}")]
    Rejected(u16),

    #[error("Notification transport error: {0}")]
    Transport(String),
}

/// Sends a text message to an external chat
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), NotifyError>;
}
