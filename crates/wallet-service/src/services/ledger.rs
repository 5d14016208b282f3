//! Ledger service
//!
//! Balance reads, privileged credits and audit reads over the transaction
//! log.

use rust_decimal::Decimal;
use tracing::{info, instrument};

use wallet_core::error::DomainError;
use wallet_core::value_objects::{Amount, PaymentMethod, Username};

use crate::dto::{
    BalanceResponse, CreditRequest, CreditResponse, ReconciliationResponse, TransactionResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authorizer recorded when a credit names none
pub const DEFAULT_AUTHORIZER: &str = "admin";

/// Rows returned by a history read when no limit is given
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Upper bound on rows returned by a history read
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Ledger service
pub struct LedgerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LedgerService<'a> {
    /// Create a new LedgerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Credit a user's balance and log the credit as one unit
    ///
    /// Inputs are validated before storage is touched, so a rejected amount
    /// leaves no trace.
    #[instrument(skip(self, request), fields(username = %request.username.trim(), amount = %request.amount))]
    pub async fn credit(&self, request: CreditRequest) -> ServiceResult<CreditResponse> {
        let username = Username::parse(&request.username)?;
        let amount = Amount::new(request.amount)?;
        let method = PaymentMethod::parse_or_default(request.method.as_deref())?;
        let authorizer = request
            .admin
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUTHORIZER);

        let receipt = self
            .ctx
            .ledger_repo()
            .credit(username.as_str(), amount, &method, authorizer)
            .await?;

        info!(
            transaction_id = receipt.transaction.id,
            new_balance = %receipt.new_balance,
            method = %method,
            authorizer,
            "Balance credited"
        );

        Ok(receipt.into())
    }

    /// Current balance; an unknown user reads as zero
    #[instrument(skip(self))]
    pub async fn get_balance(&self, username: &str) -> ServiceResult<BalanceResponse> {
        let balance = self
            .ctx
            .ledger_repo()
            .balance(username)
            .await?
            .unwrap_or(Decimal::ZERO);

        Ok(BalanceResponse {
            username: username.to_string(),
            balance,
        })
    }

    /// Most recent transactions, newest first
    #[instrument(skip(self))]
    pub async fn history(
        &self,
        username: &str,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<TransactionResponse>> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);

        let rows = self
            .ctx
            .ledger_repo()
            .find_by_username(username, limit)
            .await?;

        Ok(rows.into_iter().map(TransactionResponse::from).collect())
    }

    /// Compare a user's balance with the sum of their credited rows
    #[instrument(skip(self))]
    pub async fn reconcile(&self, username: &str) -> ServiceResult<ReconciliationResponse> {
        let username = Username::parse(username)?;
        let reconciliation = self
            .ctx
            .ledger_repo()
            .reconcile(username.as_str())
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.into_inner()))?;

        if !reconciliation.is_consistent() {
            tracing::error!(
                username = %reconciliation.username,
                balance = %reconciliation.balance,
                credited_total = %reconciliation.credited_total,
                "Balance does not match credited transactions"
            );
        }

        Ok(reconciliation.into())
    }
}
