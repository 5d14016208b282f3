//! In-memory user, ledger and intent stores

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use wallet_core::entities::{
    ChatBinding, CreditReceipt, NewTransaction, PendingIntent, Reconciliation, Transaction, User,
};
use wallet_core::error::DomainError;
use wallet_core::traits::{LedgerRepository, PendingIntentStore, RepoResult, UserRepository};
use wallet_core::value_objects::{Amount, PaymentMethod};

/// Largest value a `NUMERIC(14, 2)` balance column holds
fn max_balance() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

#[derive(Default)]
struct LedgerState {
    users: HashMap<String, User>,
    password_hashes: HashMap<String, String>,
    transactions: Vec<Transaction>,
    next_id: i64,
}

impl LedgerState {
    fn append(&mut self, tx: &NewTransaction) -> Transaction {
        self.next_id += 1;
        let row = Transaction {
            id: self.next_id,
            username: tx.username.clone(),
            amount: tx.amount.value(),
            method: tx.method.as_str().to_string(),
            status: tx.status,
            proof_file_id: tx.proof_file_id.clone(),
            admin: tx.admin.clone(),
            created_at: Utc::now(),
        };
        self.transactions.push(row.clone());
        row
    }
}

/// Users, balances and the transaction log behind one lock
///
/// Implements both [`UserRepository`] and [`LedgerRepository`] so a credit
/// can check the user and append its row atomically.
#[derive(Default)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    /// All rows, oldest first
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().transactions.clone()
    }

    /// Stored password hash, for asserting it is not the plaintext
    pub fn stored_hash(&self, username: &str) -> Option<String> {
        self.state.lock().password_hashes.get(username).cloned()
    }

    /// Insert a row as-is, bypassing the balance; for seeding legacy data
    pub fn seed_transaction(&self, tx: &NewTransaction) -> Transaction {
        self.state.lock().append(tx)
    }

    /// Overwrite a balance without logging; for drift scenarios
    pub fn force_balance(&self, username: &str, balance: Decimal) {
        if let Some(user) = self.state.lock().users.get_mut(username) {
            user.balance = balance;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryLedger {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(username).cloned())
    }

    async fn find_by_chat_id(&self, chat_id: i64) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|u| u.chat_id == Some(chat_id))
            .cloned())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.users.contains_key(&user.username) {
            return Err(DomainError::UsernameTaken(user.username.clone()));
        }
        state.users.insert(user.username.clone(), user.clone());
        state
            .password_hashes
            .insert(user.username.clone(), password_hash.to_string());
        Ok(())
    }

    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        Ok(self.state.lock().password_hashes.get(username).cloned())
    }

    async fn bind_chat(&self, username: &str, chat_id: i64) -> RepoResult<ChatBinding> {
        let mut state = self.state.lock();

        let existing = state
            .users
            .get(username)
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?
            .chat_id;
        if let Some(bound) = existing {
            return Ok(ChatBinding::AlreadyBound(bound));
        }
        if state.users.values().any(|u| u.chat_id == Some(chat_id)) {
            return Err(DomainError::ChatAlreadyBound(chat_id));
        }

        if let Some(user) = state.users.get_mut(username) {
            user.chat_id = Some(chat_id);
        }
        Ok(ChatBinding::Bound(chat_id))
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedger {
    async fn credit(
        &self,
        username: &str,
        amount: Amount,
        method: &PaymentMethod,
        authorizer: &str,
    ) -> RepoResult<CreditReceipt> {
        let mut state = self.state.lock();

        let user = state
            .users
            .get_mut(username)
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;
        let new_balance = user.balance + amount.value();
        if new_balance > max_balance() {
            return Err(DomainError::InvalidAmount(
                "balance would exceed the maximum".to_string(),
            ));
        }
        user.balance = new_balance;

        let transaction = state.append(&NewTransaction::credited(
            username,
            amount,
            method.clone(),
            authorizer,
        ));

        Ok(CreditReceipt {
            new_balance,
            transaction,
        })
    }

    async fn balance(&self, username: &str) -> RepoResult<Option<Decimal>> {
        Ok(self.state.lock().users.get(username).map(|u| u.balance))
    }

    async fn append_request(&self, transaction: &NewTransaction) -> RepoResult<Transaction> {
        Ok(self.state.lock().append(transaction))
    }

    async fn find_by_username(&self, username: &str, limit: i64) -> RepoResult<Vec<Transaction>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .state
            .lock()
            .transactions
            .iter()
            .rev()
            .filter(|t| t.username == username)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn reconcile(&self, username: &str) -> RepoResult<Option<Reconciliation>> {
        let state = self.state.lock();
        let Some(user) = state.users.get(username) else {
            return Ok(None);
        };

        let credited: Vec<&Transaction> = state
            .transactions
            .iter()
            .filter(|t| t.username == username && t.status.is_credited())
            .collect();

        Ok(Some(Reconciliation {
            username: user.username.clone(),
            balance: user.balance,
            credited_total: credited.iter().map(|t| t.amount).sum(),
            credited_count: credited.len() as i64,
        }))
    }
}

/// Pending intents keyed by chat
#[derive(Default)]
pub struct InMemoryIntentStore {
    intents: Mutex<HashMap<i64, PendingIntent>>,
}

impl InMemoryIntentStore {
    pub fn len(&self) -> usize {
        self.intents.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PendingIntentStore for InMemoryIntentStore {
    async fn put(&self, intent: &PendingIntent) -> RepoResult<()> {
        self.intents.lock().insert(intent.chat_id, intent.clone());
        Ok(())
    }

    async fn get(&self, chat_id: i64) -> RepoResult<Option<PendingIntent>> {
        Ok(self.intents.lock().get(&chat_id).cloned())
    }

    async fn remove(&self, chat_id: i64) -> RepoResult<bool> {
        Ok(self.intents.lock().remove(&chat_id).is_some())
    }
}
