//! Recharge intake service
//!
//! Users and the chat bot log recharge requests here; only an approval
//! moves money, through the ledger.

use tracing::{info, instrument, warn};

use wallet_core::entities::{NewTransaction, PendingIntent};
use wallet_core::error::DomainError;
use wallet_core::value_objects::{Amount, PaymentMethod};

use crate::dto::{
    CreditRequest, CreditResponse, PendingIntentRequest, PendingIntentResponse, ProofRequest,
    RechargeRequest, RechargeResponse, TransactionResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ledger::LedgerService;

/// Recharge intake service
pub struct RechargeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RechargeService<'a> {
    /// Create a new RechargeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Log a recharge request for an authenticated user
    ///
    /// The `requested` row is committed before any notification is attempted.
    /// Notification failures are reported through `notified`, never as errors.
    #[instrument(skip(self, request), fields(amount = %request.amount))]
    pub async fn request_recharge(
        &self,
        username: &str,
        request: RechargeRequest,
    ) -> ServiceResult<RechargeResponse> {
        let amount = Amount::new(request.amount)?;
        let method = PaymentMethod::parse(&request.method)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;

        let transaction = self
            .ctx
            .ledger_repo()
            .append_request(&NewTransaction::requested(&user.username, amount, method.clone()))
            .await?;

        info!(transaction_id = transaction.id, method = %method, "Recharge requested");

        let notified = match user.chat_id {
            Some(chat_id) => {
                let text = recharge_requested_message(&user.username, amount, &method);
                self.notify(chat_id, &text).await
            }
            None => false,
        };

        Ok(RechargeResponse {
            transaction: transaction.into(),
            notified,
        })
    }

    /// Approve a recharge: a ledger credit behind the admin secret
    pub async fn approve_recharge(&self, request: CreditRequest) -> ServiceResult<CreditResponse> {
        LedgerService::new(self.ctx).credit(request).await
    }

    /// Record the method/amount a chat declared, replacing any earlier one
    #[instrument(skip(self, request), fields(chat_id = request.chat_id, amount = %request.amount))]
    pub async fn set_intent(
        &self,
        request: PendingIntentRequest,
    ) -> ServiceResult<PendingIntentResponse> {
        let amount = Amount::new(request.amount)?;
        let method = PaymentMethod::parse_or_default(request.method.as_deref())?;

        let intent = PendingIntent::new(request.chat_id, method.as_str(), amount.value());
        self.ctx.intent_store().put(&intent).await?;

        Ok(intent.into())
    }

    /// Log a receipt against the chat's pending intent, then clear the intent
    #[instrument(skip(self, request), fields(chat_id = request.chat_id))]
    pub async fn submit_proof(&self, request: ProofRequest) -> ServiceResult<TransactionResponse> {
        let file_id = request.file_id.trim();
        if file_id.is_empty() {
            return Err(ServiceError::validation("file_id must not be empty"));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_chat_id(request.chat_id)
            .await?
            .ok_or(DomainError::ChatNotBound(request.chat_id))?;

        let intent = self
            .ctx
            .intent_store()
            .get(request.chat_id)
            .await?
            .ok_or(DomainError::PendingIntentNotFound(request.chat_id))?;

        let amount = Amount::new(intent.amount)?;
        let method = PaymentMethod::parse(&intent.method)?;

        let transaction = self
            .ctx
            .ledger_repo()
            .append_request(&NewTransaction::requested(&user.username, amount, method).with_proof(file_id))
            .await?;

        // The row is already committed; a stale intent only costs a duplicate proof
        if let Err(e) = self.ctx.intent_store().remove(request.chat_id).await {
            warn!(error = %e, "Failed to clear pending intent");
        }

        info!(
            transaction_id = transaction.id,
            username = %user.username,
            "Proof recorded"
        );

        Ok(transaction.into())
    }

    async fn notify(&self, chat_id: i64, text: &str) -> bool {
        let sent = tokio::time::timeout(
            self.ctx.notify_timeout(),
            self.ctx.notifier().notify(chat_id, text),
        )
        .await;

        match sent {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!(chat_id, error = %e, "Recharge notification failed");
                false
            }
            Err(_) => {
                warn!(chat_id, "Recharge notification timed out");
                false
            }
        }
    }
}

fn recharge_requested_message(username: &str, amount: Amount, method: &PaymentMethod) -> String {
    format!(
        "Hi {username}, we received your recharge request of {amount} via {method}. \
         Please reply with a photo of your payment receipt."
    )
}
