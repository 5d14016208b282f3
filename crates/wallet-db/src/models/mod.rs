//! Database models - SQLx-compatible structs for PostgreSQL tables

mod transaction;
mod user;

pub use transaction::{ReconciliationModel, TransactionModel};
pub use user::UserModel;
