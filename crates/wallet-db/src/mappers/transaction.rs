//! Transaction model -> entity mappers

use wallet_core::entities::{Reconciliation, Transaction, TransactionStatus};
use wallet_core::error::DomainError;

use crate::models::{ReconciliationModel, TransactionModel};

impl TryFrom<TransactionModel> for Transaction {
    type Error = DomainError;

    fn try_from(model: TransactionModel) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: model.id,
            username: model.username,
            amount: model.amount,
            method: model.method,
            status: model.status.parse::<TransactionStatus>()?,
            proof_file_id: model.proof_file_id,
            admin: model.admin,
            created_at: model.created_at,
        })
    }
}

impl From<ReconciliationModel> for Reconciliation {
    fn from(model: ReconciliationModel) -> Self {
        Reconciliation {
            username: model.username,
            balance: model.balance,
            credited_total: model.credited_total,
            credited_count: model.credited_count,
        }
    }
}
