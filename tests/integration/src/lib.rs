//! Integration test utilities for the wallet server
//!
//! Spawns the real router against a live PostgreSQL and Redis and talks to
//! it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
