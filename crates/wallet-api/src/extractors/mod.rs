//! Axum extractors for request handling
//!
//! Custom extractors for session and admin authentication and validated
//! bodies.

mod auth;
mod validated;

pub use auth::{AdminAuth, AuthUser, ADMIN_SECRET_HEADER};
pub use validated::ValidatedJson;
