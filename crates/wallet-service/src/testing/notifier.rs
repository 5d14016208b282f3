//! Notifier double that records what it was asked to send

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use wallet_core::traits::{Notifier, NotifyError};

/// How a [`RecordingNotifier`] answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierBehavior {
    Succeed,
    /// Answer with a non-2xx status
    Reject(u16),
    /// Never answer within any reasonable timeout
    Hang,
}

/// Records every attempted notification
pub struct RecordingNotifier {
    behavior: NotifierBehavior,
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingNotifier {
    pub fn new(behavior: NotifierBehavior) -> Self {
        Self {
            behavior,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Attempted notifications as `(chat_id, text)`, in call order
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        self.sent.lock().push((chat_id, text.to_string()));

        match self.behavior {
            NotifierBehavior::Succeed => Ok(()),
            NotifierBehavior::Reject(status) => Err(NotifyError::Rejected(status)),
            NotifierBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(NotifyError::Timeout)
            }
        }
    }
}
