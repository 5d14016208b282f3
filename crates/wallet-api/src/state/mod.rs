//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration, the admin secret and a readiness probe for the backing
//! stores.

use std::sync::Arc;

use async_trait::async_trait;
use wallet_cache::SharedRedisPool;
use wallet_common::{AdminSecret, AppConfig, SessionIssuer};
use wallet_db::PgPool;
use wallet_service::ServiceContext;

/// Reports whether the backing stores answer
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn database(&self) -> bool;
    async fn redis(&self) -> bool;
}

/// Probe over the live PostgreSQL and Redis pools
pub struct BackendProbe {
    pool: PgPool,
    redis: SharedRedisPool,
}

impl BackendProbe {
    pub fn new(pool: PgPool, redis: SharedRedisPool) -> Self {
        Self { pool, redis }
    }
}

#[async_trait]
impl ReadinessProbe for BackendProbe {
    async fn database(&self) -> bool {
        self.pool.acquire().await.is_ok()
    }

    async fn redis(&self) -> bool {
        self.redis.health_check().await.is_ok()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    admin_secret: AdminSecret,
    probe: Arc<dyn ReadinessProbe>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        probe: Arc<dyn ReadinessProbe>,
    ) -> Self {
        let admin_secret = AdminSecret::new(config.admin.secret.clone());
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            admin_secret,
            probe,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the session issuer from the service context
    pub fn session_issuer(&self) -> &SessionIssuer {
        self.service_context.session_issuer()
    }

    /// Secret expected in `X-Secret-Key`
    pub fn admin_secret(&self) -> &AdminSecret {
        &self.admin_secret
    }

    pub fn probe(&self) -> &dyn ReadinessProbe {
        self.probe.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish_non_exhaustive()
    }
}
