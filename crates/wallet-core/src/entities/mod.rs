//! Domain entities - core business objects

mod pending_intent;
mod transaction;
mod user;

pub use pending_intent::PendingIntent;
pub use transaction::{
    CreditReceipt, NewTransaction, Reconciliation, Transaction, TransactionStatus,
};
pub use user::{ChatBinding, User};
