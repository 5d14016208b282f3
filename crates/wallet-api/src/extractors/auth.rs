//! Authentication extractors
//!
//! `AuthUser` resolves a bearer session token to a username. `AdminAuth`
//! checks the shared admin secret carried in `X-Secret-Key`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the admin secret
pub const ADMIN_SECRET_HEADER: &str = "x-secret-key";

/// Authenticated user extracted from a session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    if e.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        ApiError::InvalidAuthFormat
                    }
                })?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .session_issuer()
            .validate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected session token");
                ApiError::App(e)
            })?;

        Ok(Self {
            username: claims.sub,
        })
    }
}

/// Marker for requests that presented the admin secret
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(ADMIN_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let app_state = AppState::from_ref(state);
        if let Err(e) = app_state.admin_secret().verify(presented) {
            tracing::warn!(uri = %parts.uri, "Rejected admin request");
            return Err(ApiError::App(e));
        }

        Ok(Self)
    }
}
