//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use wallet_cache::{create_shared_pool, RedisPendingIntentStore, RedisPoolConfig};
use wallet_common::{AppConfig, AppError, SessionIssuer};
use wallet_db::{create_pool, run_migrations, PgLedgerRepository, PgUserRepository};
use wallet_service::{ServiceContextBuilder, TelegramNotifier};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::{AppState, BackendProbe};

/// Build the complete Axum application with all routes and middleware
///
/// Health probes are merged after the rate limit so they are never throttled.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = api.merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Connects to PostgreSQL and applies pending migrations before anything
/// else, so a misconfigured database fails startup.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = wallet_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    run_migrations(&pool, &config.database.migrations_dir)
        .await
        .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
    info!(dir = %config.database.migrations_dir, "PostgreSQL ready, migrations applied");

    info!("Connecting to Redis...");
    let redis_pool = create_shared_pool(RedisPoolConfig::from(&config.redis))
        .map_err(|e| AppError::Cache(e.to_string()))?;
    if let Err(e) = redis_pool.health_check().await {
        // Only the bot flow needs Redis; the ledger keeps serving
        tracing::warn!(error = %e, "Redis not reachable at startup");
    }

    let notifier = TelegramNotifier::from_config(&config.telegram)
        .map_err(|e| AppError::Config(format!("notifier: {e}")))?;

    let session_issuer = Arc::new(SessionIssuer::from_config(&config.session));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .ledger_repo(Arc::new(PgLedgerRepository::new(pool.clone())))
        .intent_store(Arc::new(RedisPendingIntentStore::with_ttl(
            redis_pool.clone(),
            config.redis.pending_intent_ttl,
        )))
        .notifier(notifier)
        .notify_timeout(Duration::from_secs(config.telegram.timeout_secs))
        .session_issuer(session_issuer)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let probe = Arc::new(BackendProbe::new(pool, redis_pool));

    Ok(AppState::new(service_context, config, probe))
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
