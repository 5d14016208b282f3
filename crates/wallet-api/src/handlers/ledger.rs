//! Session-authenticated ledger handlers
//!
//! The caller's own balance, history and recharge requests.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use wallet_service::dto::{
    BalanceResponse, HistoryQuery, RechargeRequest, RechargeResponse, TransactionResponse,
};
use wallet_service::{LedgerService, RechargeService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Current balance of the authenticated user
///
/// GET /api/balance
pub async fn get_balance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<BalanceResponse>> {
    let service = LedgerService::new(state.service_context());
    let response = service.get_balance(&auth.username).await?;
    Ok(Json(response))
}

/// Recent transactions of the authenticated user, newest first
///
/// GET /api/transactions?limit=N
pub async fn get_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = LedgerService::new(state.service_context());
    let response = service.history(&auth.username, query.limit).await?;
    Ok(Json(response))
}

/// Log a recharge request; the balance only moves on approval
///
/// POST /api/recharges
pub async fn request_recharge(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RechargeRequest>,
) -> ApiResult<Created<Json<RechargeResponse>>> {
    let service = RechargeService::new(state.service_context());
    let response = service.request_recharge(&auth.username, request).await?;
    Ok(Created(Json(response)))
}
