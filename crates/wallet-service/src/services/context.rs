//! Service context - dependency container for services
//!
//! Holds the repositories, the pending intent store, the notifier and the
//! session issuer. Storage backends are trait objects so the same services
//! run over PostgreSQL/Redis in production and in-memory stores in tests.

use std::sync::Arc;
use std::time::Duration;

use wallet_common::SessionIssuer;
use wallet_core::traits::{LedgerRepository, Notifier, PendingIntentStore, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Default upper bound on a single notification attempt
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    ledger_repo: Arc<dyn LedgerRepository>,

    // Ephemeral state
    intent_store: Arc<dyn PendingIntentStore>,

    // Outbound
    notifier: Arc<dyn Notifier>,
    notify_timeout: Duration,

    // Sessions
    session_issuer: Arc<SessionIssuer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        ledger_repo: Arc<dyn LedgerRepository>,
        intent_store: Arc<dyn PendingIntentStore>,
        notifier: Arc<dyn Notifier>,
        session_issuer: Arc<SessionIssuer>,
    ) -> Self {
        Self {
            user_repo,
            ledger_repo,
            intent_store,
            notifier,
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
            session_issuer,
        }
    }

    /// Override the notification timeout
    #[must_use]
    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the ledger repository
    pub fn ledger_repo(&self) -> &dyn LedgerRepository {
        self.ledger_repo.as_ref()
    }

    /// Get the pending intent store
    pub fn intent_store(&self) -> &dyn PendingIntentStore {
        self.intent_store.as_ref()
    }

    /// Get the chat notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Upper bound on a single notification attempt
    pub fn notify_timeout(&self) -> Duration {
        self.notify_timeout
    }

    /// Get the session issuer
    pub fn session_issuer(&self) -> &SessionIssuer {
        self.session_issuer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("notify_timeout", &self.notify_timeout)
            .field("session_issuer", &self.session_issuer)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    ledger_repo: Option<Arc<dyn LedgerRepository>>,
    intent_store: Option<Arc<dyn PendingIntentStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    notify_timeout: Option<Duration>,
    session_issuer: Option<Arc<SessionIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn ledger_repo(mut self, repo: Arc<dyn LedgerRepository>) -> Self {
        self.ledger_repo = Some(repo);
        self
    }

    pub fn intent_store(mut self, store: Arc<dyn PendingIntentStore>) -> Self {
        self.intent_store = Some(store);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = Some(timeout);
        self
    }

    pub fn session_issuer(mut self, issuer: Arc<SessionIssuer>) -> Self {
        self.session_issuer = Some(issuer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let ctx = ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.ledger_repo
                .ok_or_else(|| ServiceError::validation("ledger_repo is required"))?,
            self.intent_store
                .ok_or_else(|| ServiceError::validation("intent_store is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.session_issuer
                .ok_or_else(|| ServiceError::validation("session_issuer is required"))?,
        );
        Ok(match self.notify_timeout {
            Some(timeout) => ctx.with_notify_timeout(timeout),
            None => ctx,
        })
    }
}
