//! Authentication handlers
//!
//! Endpoints for user registration and login.

use axum::{extract::State, Json};
use wallet_service::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use wallet_service::IdentityService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = IdentityService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = IdentityService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
