//! Route definitions
//!
//! All API routes mounted under /api; health probes live at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, auth, bot, health, ledger};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(ledger_routes())
        .merge(admin_routes())
        .merge(bot_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Routes acting on the session's own account
fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/balance", get(ledger::get_balance))
        .route("/transactions", get(ledger::get_transactions))
        .route("/recharges", post(ledger::request_recharge))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/credit", post(admin::credit))
        .route("/admin/users/:username/reconcile", get(admin::reconcile))
}

/// Chat bot routes
fn bot_routes() -> Router<AppState> {
    Router::new()
        .route("/bot/link", post(bot::link_chat))
        .route("/bot/intent", post(bot::set_intent))
        .route("/bot/proof", post(bot::submit_proof))
}
