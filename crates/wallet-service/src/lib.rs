//! # wallet-service
//!
//! Application layer: identity, ledger and recharge use cases, their DTOs,
//! and the outbound chat notifier.

pub mod dto;
pub mod notifier;
pub mod services;

#[cfg(feature = "testing")]
pub mod testing;

pub use notifier::{DisabledNotifier, TelegramNotifier};
pub use services::{
    IdentityService, LedgerService, RechargeService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
