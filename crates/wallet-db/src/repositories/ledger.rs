//! PostgreSQL implementation of LedgerRepository
//!
//! Every balance change happens inside a transaction that also appends the
//! matching `credited` row, so the two commit or roll back together.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use wallet_core::entities::{
    CreditReceipt, NewTransaction, Reconciliation, Transaction, TransactionStatus,
};
use wallet_core::traits::{LedgerRepository, RepoResult};
use wallet_core::value_objects::{Amount, PaymentMethod};

use crate::models::{ReconciliationModel, TransactionModel};

use super::error::{map_db_error, map_ledger_write_error, user_not_found};

const INSERT_TRANSACTION: &str = r"
    INSERT INTO transactions (username, amount, method, status, proof_file_id, admin)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, username, amount, method, status, proof_file_id, admin, created_at
";

/// PostgreSQL implementation of LedgerRepository
#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    /// Create a new PgLedgerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerRepository for PgLedgerRepository {
    #[instrument(skip(self, amount, method), fields(amount = %amount, method = %method))]
    async fn credit(
        &self,
        username: &str,
        amount: Amount,
        method: &PaymentMethod,
        authorizer: &str,
    ) -> RepoResult<CreditReceipt> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Single statement increment; the row lock it takes serializes
        // concurrent credits to the same user
        let new_balance = sqlx::query_scalar::<_, Decimal>(
            r"
            UPDATE users SET balance = balance + $2
            WHERE username = $1
            RETURNING balance
            ",
        )
        .bind(username)
        .bind(amount.value())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_ledger_write_error)?
        .ok_or_else(|| user_not_found(username))?;

        let row = sqlx::query_as::<_, TransactionModel>(INSERT_TRANSACTION)
            .bind(username)
            .bind(amount.value())
            .bind(method.as_str())
            .bind(TransactionStatus::Credited.as_str())
            .bind(None::<String>)
            .bind(authorizer)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_ledger_write_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(CreditReceipt {
            new_balance,
            transaction: Transaction::try_from(row)?,
        })
    }

    #[instrument(skip(self))]
    async fn balance(&self, username: &str) -> RepoResult<Option<Decimal>> {
        sqlx::query_scalar::<_, Decimal>(
            r"
            SELECT balance FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, transaction), fields(username = %transaction.username, status = %transaction.status))]
    async fn append_request(&self, transaction: &NewTransaction) -> RepoResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionModel>(INSERT_TRANSACTION)
            .bind(&transaction.username)
            .bind(transaction.amount.value())
            .bind(transaction.method.as_str())
            .bind(transaction.status.as_str())
            .bind(&transaction.proof_file_id)
            .bind(&transaction.admin)
            .fetch_one(&self.pool)
            .await
            .map_err(map_ledger_write_error)?;

        Transaction::try_from(row)
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str, limit: i64) -> RepoResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, username, amount, method, status, proof_file_id, admin, created_at
            FROM transactions
            WHERE username = $1
            ORDER BY id DESC
            LIMIT $2
            ",
        )
        .bind(username)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn reconcile(&self, username: &str) -> RepoResult<Option<Reconciliation>> {
        let result = sqlx::query_as::<_, ReconciliationModel>(
            r"
            SELECT u.username,
                   u.balance,
                   COALESCE(SUM(t.amount) FILTER (WHERE t.status IN ('credited', 'aprobado')), 0)
                       AS credited_total,
                   COUNT(t.id) FILTER (WHERE t.status IN ('credited', 'aprobado'))
                       AS credited_count
            FROM users u
            LEFT JOIN transactions t ON t.username = u.username
            WHERE u.username = $1
            GROUP BY u.username, u.balance
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reconciliation::from))
    }
}
