//! Admin handlers, gated by `X-Secret-Key`

use axum::{
    extract::{Path, State},
    Json,
};
use wallet_service::dto::{CreditRequest, CreditResponse, ReconciliationResponse};
use wallet_service::{LedgerService, RechargeService};

use crate::extractors::{AdminAuth, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Approve a recharge by crediting the user's balance
///
/// POST /api/admin/credit
pub async fn credit(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreditRequest>,
) -> ApiResult<Json<CreditResponse>> {
    let service = RechargeService::new(state.service_context());
    let response = service.approve_recharge(request).await?;
    Ok(Json(response))
}

/// Compare a balance with the sum of its credited rows
///
/// GET /api/admin/users/:username/reconcile
pub async fn reconcile(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(username): Path<String>,
) -> ApiResult<Json<ReconciliationResponse>> {
    let service = LedgerService::new(state.service_context());
    let response = service.reconcile(&username).await?;
    Ok(Json(response))
}
