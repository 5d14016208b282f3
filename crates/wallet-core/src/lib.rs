//! # wallet-core
//!
//! Domain layer containing entities, value objects, and repository traits for the balance ledger.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ChatBinding, CreditReceipt, NewTransaction, PendingIntent, Reconciliation, Transaction,
    TransactionStatus, User,
};
pub use error::DomainError;
pub use traits::{
    LedgerRepository, NotifyError, Notifier, PendingIntentStore, RepoResult, UserRepository,
};
pub use value_objects::{Amount, PaymentMethod, Username};

// Re-export Decimal so downstream crates agree on the money type
pub use rust_decimal::Decimal;
