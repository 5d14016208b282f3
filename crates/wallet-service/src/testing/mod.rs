//! In-memory backends for tests
//!
//! Enabled with the `testing` feature. The stores keep the same contracts as
//! the PostgreSQL/Redis implementations: credits are atomic per call, usernames
//! and chat ids are unique, and intents are last-write-wins.

mod ledger;
mod notifier;

use std::sync::Arc;
use std::time::Duration;

use wallet_common::SessionIssuer;

pub use ledger::{InMemoryIntentStore, InMemoryLedger};
pub use notifier::{NotifierBehavior, RecordingNotifier};

use crate::services::ServiceContext;

/// Secret used by [`TestHarness`] session issuers
pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-long-enough";

/// A service context wired to in-memory backends, with handles to inspect them
#[derive(Clone)]
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub ledger: Arc<InMemoryLedger>,
    pub intents: Arc<InMemoryIntentStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub issuer: Arc<SessionIssuer>,
}

impl TestHarness {
    /// Harness whose notifier always succeeds
    pub fn new() -> Self {
        Self::with_notifier(RecordingNotifier::new(NotifierBehavior::Succeed))
    }

    /// Harness with a specific notifier behaviour
    pub fn with_notifier(notifier: RecordingNotifier) -> Self {
        Self::build(notifier, crate::services::DEFAULT_NOTIFY_TIMEOUT)
    }

    /// Harness with a notifier and a custom notification timeout
    pub fn build(notifier: RecordingNotifier, notify_timeout: Duration) -> Self {
        let ledger = Arc::new(InMemoryLedger::default());
        let intents = Arc::new(InMemoryIntentStore::default());
        let notifier = Arc::new(notifier);
        let issuer = Arc::new(SessionIssuer::new(TEST_JWT_SECRET, 86_400));

        let ctx = ServiceContext::new(
            ledger.clone(),
            ledger.clone(),
            intents.clone(),
            notifier.clone(),
            issuer.clone(),
        )
        .with_notify_timeout(notify_timeout);

        Self {
            ctx,
            ledger,
            intents,
            notifier,
            issuer,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
