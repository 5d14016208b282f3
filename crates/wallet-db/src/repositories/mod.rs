//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in wallet-core.

mod error;
mod ledger;
mod user;

pub use ledger::PgLedgerRepository;
pub use user::PgUserRepository;
