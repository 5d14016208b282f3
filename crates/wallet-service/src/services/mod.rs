//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates domain operations over its repositories.

pub mod context;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod recharge;

pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_NOTIFY_TIMEOUT};
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
pub use ledger::LedgerService;
pub use recharge::RechargeService;
