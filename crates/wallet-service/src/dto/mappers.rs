//! Domain entity -> response DTO conversions

use wallet_common::SessionToken;
use wallet_core::entities::{
    ChatBinding, CreditReceipt, PendingIntent, Reconciliation, Transaction, User,
};

use super::responses::{
    ChatBindingResponse, CreditResponse, LoginResponse, PendingIntentResponse,
    ReconciliationResponse, TransactionResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            balance: user.balance,
            created_at: user.created_at,
        }
    }
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            username: tx.username,
            amount: tx.amount,
            method: tx.method,
            status: tx.status,
            proof_file_id: tx.proof_file_id,
            admin: tx.admin,
            created_at: tx.created_at,
        }
    }
}

impl From<CreditReceipt> for CreditResponse {
    fn from(receipt: CreditReceipt) -> Self {
        Self {
            username: receipt.transaction.username.clone(),
            new_balance: receipt.new_balance,
            transaction: receipt.transaction.into(),
        }
    }
}

impl From<Reconciliation> for ReconciliationResponse {
    fn from(rec: Reconciliation) -> Self {
        Self {
            consistent: rec.is_consistent(),
            username: rec.username,
            balance: rec.balance,
            credited_total: rec.credited_total,
            credited_count: rec.credited_count,
        }
    }
}

impl From<PendingIntent> for PendingIntentResponse {
    fn from(intent: PendingIntent) -> Self {
        Self {
            chat_id: intent.chat_id,
            method: intent.method,
            amount: intent.amount,
            created_at: intent.created_at,
        }
    }
}

impl LoginResponse {
    pub fn new(username: impl Into<String>, token: SessionToken) -> Self {
        Self {
            username: username.into(),
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            expires_at: token.expires_at,
        }
    }
}

impl ChatBindingResponse {
    pub fn new(username: impl Into<String>, binding: ChatBinding) -> Self {
        Self {
            username: username.into(),
            chat_id: binding.chat_id(),
            newly_bound: binding.is_new(),
        }
    }
}
