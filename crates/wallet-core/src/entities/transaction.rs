//! Transaction entity - append-only audit record of balance events

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Amount, PaymentMethod};

/// Transaction status
///
/// `requested` and `credited` are written as separate rows; a request is never
/// updated in place when it is approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Requested,
    Credited,
    /// Legacy synonym of `Credited` found in older rows. Read-only.
    Aprobado,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Credited => "credited",
            Self::Aprobado => "aprobado",
        }
    }

    /// Whether rows with this status moved money into the balance
    #[inline]
    pub fn is_credited(&self) -> bool {
        matches!(self, Self::Credited | Self::Aprobado)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(Self::Requested),
            "credited" => Ok(Self::Credited),
            "aprobado" => Ok(Self::Aprobado),
            other => Err(DomainError::InternalError(format!(
                "unknown transaction status: {other}"
            ))),
        }
    }
}

/// A persisted transaction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub username: String,
    pub amount: Decimal,
    pub method: String,
    pub status: TransactionStatus,
    pub proof_file_id: Option<String>,
    pub admin: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A transaction about to be appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub username: String,
    pub amount: Amount,
    pub method: PaymentMethod,
    pub status: TransactionStatus,
    pub proof_file_id: Option<String>,
    pub admin: Option<String>,
}

impl NewTransaction {
    /// A user-initiated recharge request; never moves the balance
    pub fn requested(username: impl Into<String>, amount: Amount, method: PaymentMethod) -> Self {
        Self {
            username: username.into(),
            amount,
            method,
            status: TransactionStatus::Requested,
            proof_file_id: None,
            admin: None,
        }
    }

    /// A credit approved by `admin`
    pub fn credited(
        username: impl Into<String>,
        amount: Amount,
        method: PaymentMethod,
        admin: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            amount,
            method,
            status: TransactionStatus::Credited,
            proof_file_id: None,
            admin: Some(admin.into()),
        }
    }

    /// Attach a receipt reference
    pub fn with_proof(mut self, file_id: impl Into<String>) -> Self {
        self.proof_file_id = Some(file_id.into());
        self
    }
}

/// Result of a successful credit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditReceipt {
    pub new_balance: Decimal,
    pub transaction: Transaction,
}

/// Balance vs. credited-row totals for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub username: String,
    pub balance: Decimal,
    pub credited_total: Decimal,
    pub credited_count: i64,
}

impl Reconciliation {
    /// The balance equals the sum of credited rows
    pub fn is_consistent(&self) -> bool {
        self.balance == self.credited_total
    }
}
