//! Telegram Bot API notifier
//!
//! Sends plain-text messages through `sendMessage`. Each call is bounded by
//! the client timeout; the caller decides what a failure means.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use wallet_common::TelegramConfig;
use wallet_core::traits::{Notifier, NotifyError};

use super::DisabledNotifier;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Notifier backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramNotifier {
    http: Client,
    endpoint: String,
}

impl TelegramNotifier {
    /// Create a notifier for `bot_token` against `api_base`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(api_base: &str, bot_token: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/bot{bot_token}/sendMessage", api_base.trim_end_matches('/')),
        })
    }

    /// Build the configured notifier, or a disabled one when no token is set
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &TelegramConfig) -> Result<Arc<dyn Notifier>, reqwest::Error> {
        match config.bot_token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                let notifier = Self::new(
                    &config.api_base,
                    token,
                    Duration::from_secs(config.timeout_secs),
                )?;
                Ok(Arc::new(notifier))
            }
            None => {
                tracing::warn!("TELEGRAM_BOT_TOKEN not set, chat notifications disabled");
                Ok(Arc::new(DisabledNotifier))
            }
        }
    }
}

impl std::fmt::Debug for TelegramNotifier {
    // The endpoint embeds the bot token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier").finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout
                } else {
                    // Strip the URL, it carries the token
                    NotifyError::Transport(e.without_url().to_string())
                }
            })?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Rejected(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let notifier =
            TelegramNotifier::new("https://api.telegram.org/", "123:abc", Duration::from_secs(1))
                .unwrap();
        assert_eq!(notifier.endpoint, "https://api.telegram.org/bot123:abc/sendMessage");
        assert!(!format!("{notifier:?}").contains("123:abc"));
    }

    #[tokio::test]
    async fn test_disabled_without_token() {
        let config = TelegramConfig {
            bot_token: None,
            api_base: "https://api.telegram.org".to_string(),
            timeout_secs: 10,
        };
        let notifier = TelegramNotifier::from_config(&config).unwrap();
        assert!(matches!(
            notifier.notify(1, "hi").await,
            Err(NotifyError::Disabled)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 1 on localhost refuses connections
        let notifier =
            TelegramNotifier::new("http://127.0.0.1:1", "t", Duration::from_secs(2)).unwrap();
        let result = notifier.notify(1, "hi").await;
        assert!(matches!(
            result,
            Err(NotifyError::Transport(_) | NotifyError::Timeout)
        ));
    }
}
