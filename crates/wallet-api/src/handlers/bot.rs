//! Chat bot handlers, gated by `X-Secret-Key`
//!
//! The bot links chats to users, declares what a chat intends to pay and
//! reports receipts.

use axum::{extract::State, Json};
use wallet_service::dto::{
    ChatBindingResponse, LinkChatRequest, PendingIntentRequest, PendingIntentResponse,
    ProofRequest, TransactionResponse,
};
use wallet_service::{IdentityService, RechargeService};

use crate::extractors::{AdminAuth, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/bot/link
pub async fn link_chat(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<LinkChatRequest>,
) -> ApiResult<Json<ChatBindingResponse>> {
    let service = IdentityService::new(state.service_context());
    let response = service.bind_chat(request).await?;
    Ok(Json(response))
}

/// POST /api/bot/intent
pub async fn set_intent(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<PendingIntentRequest>,
) -> ApiResult<Json<PendingIntentResponse>> {
    let service = RechargeService::new(state.service_context());
    let response = service.set_intent(request).await?;
    Ok(Json(response))
}

/// POST /api/bot/proof
pub async fn submit_proof(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<ProofRequest>,
) -> ApiResult<Created<Json<TransactionResponse>>> {
    let service = RechargeService::new(state.service_context());
    let response = service.submit_proof(request).await?;
    Ok(Created(Json(response)))
}
