//! Ports implemented by the infrastructure crates

mod notifier;
mod repositories;

pub use notifier::{NotifyError, Notifier};
pub use repositories::{LedgerRepository, PendingIntentStore, RepoResult, UserRepository};
