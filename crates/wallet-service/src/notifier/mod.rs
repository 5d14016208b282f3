//! Outbound chat notifications

mod telegram;

use async_trait::async_trait;
use wallet_core::traits::{Notifier, NotifyError};

pub use telegram::TelegramNotifier;

/// Notifier used when no bot token is configured; every call reports `Disabled`
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, _chat_id: i64, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Disabled)
    }
}
