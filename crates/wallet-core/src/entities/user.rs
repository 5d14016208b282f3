//! User entity - identity plus balance aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::value_objects::Username;

/// A registered account holding a balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub balance: Decimal,
    /// External chat the user receives notifications on, set at most once
    pub chat_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a freshly registered user with a zero balance
    pub fn new(username: Username) -> Self {
        Self {
            username: username.into_inner(),
            balance: Decimal::ZERO,
            chat_id: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the user has bound an external chat
    #[inline]
    pub fn has_chat_binding(&self) -> bool {
        self.chat_id.is_some()
    }
}

/// Outcome of binding a chat to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatBinding {
    /// The chat was bound by this call
    Bound(i64),
    /// The user already had a binding; it was left unchanged
    AlreadyBound(i64),
}

impl ChatBinding {
    /// The chat id the user is bound to after the call
    pub fn chat_id(&self) -> i64 {
        match self {
            Self::Bound(id) | Self::AlreadyBound(id) => *id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::Bound(_))
    }
}
