//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::entities::{
    ChatBinding, CreditReceipt, NewTransaction, PendingIntent, Reconciliation, Transaction, User,
};
use crate::error::DomainError;
use crate::value_objects::{Amount, PaymentMethod};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find the user bound to an external chat
    async fn find_by_chat_id(&self, chat_id: i64) -> RepoResult<Option<User>>;

    /// Create a new user
    ///
    /// Fails with `UsernameTaken` when the username exists. The check is the
    /// insert itself, not a prior lookup.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;

    /// Bind a chat to a user. First write wins per user; a chat already bound
    /// to someone else yields `ChatAlreadyBound`.
    async fn bind_chat(&self, username: &str, chat_id: i64) -> RepoResult<ChatBinding>;
}

// ============================================================================
// Ledger Repository
// ============================================================================

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Increment the balance and append a `credited` row as one unit.
    ///
    /// Either both become visible or neither does. Fails with `UserNotFound`
    /// when the user does not exist.
    async fn credit(
        &self,
        username: &str,
        amount: Amount,
        method: &PaymentMethod,
        authorizer: &str,
    ) -> RepoResult<CreditReceipt>;

    /// Current balance, `None` for an unknown user
    async fn balance(&self, username: &str) -> RepoResult<Option<Decimal>>;

    /// Append a row that does not move the balance (status `requested`)
    async fn append_request(&self, transaction: &NewTransaction) -> RepoResult<Transaction>;

    /// Most recent transactions for a user, newest first
    async fn find_by_username(&self, username: &str, limit: i64) -> RepoResult<Vec<Transaction>>;

    /// Compare the balance with the sum of credited rows
    async fn reconcile(&self, username: &str) -> RepoResult<Option<Reconciliation>>;
}

// ============================================================================
// Pending Intent Store
// ============================================================================

#[async_trait]
pub trait PendingIntentStore: Send + Sync {
    /// Store the intent for its chat, replacing any previous one
    async fn put(&self, intent: &PendingIntent) -> RepoResult<()>;

    /// Get the intent for a chat
    async fn get(&self, chat_id: i64) -> RepoResult<Option<PendingIntent>>;

    /// Remove the intent for a chat, returning whether one existed
    async fn remove(&self, chat_id: i64) -> RepoResult<bool>;
}
