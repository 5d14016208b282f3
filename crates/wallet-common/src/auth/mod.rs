//! Authentication utilities

mod admin;
mod password;
mod session;

pub use admin::AdminSecret;
pub use password::{hash_password, validate_password, verify_password};
pub use session::{SessionClaims, SessionIssuer, SessionToken};
