//! # wallet-db
//!
//! PostgreSQL implementations of the `wallet-core` repository traits via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and startup migrations
//! - Row models with SQLx `FromRow` derives, mapped into domain entities
//! - `PgUserRepository` for identities and chat bindings
//! - `PgLedgerRepository` for balances and the transaction trail
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wallet_db::{create_pool, run_migrations, DatabaseConfig, PgLedgerRepository};
//!
//! async fn example(config: &wallet_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let db_config = DatabaseConfig::from(&config.database);
//!     let pool = create_pool(&db_config).await?;
//!     run_migrations(&pool, &db_config.migrations_dir).await?;
//!     let ledger = PgLedgerRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgLedgerRepository, PgUserRepository};
