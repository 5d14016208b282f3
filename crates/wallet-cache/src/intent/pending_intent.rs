//! Pending intent storage in Redis.
//!
//! One JSON value per chat, overwritten on every declaration and expired
//! after a configurable TTL.

use async_trait::async_trait;

use wallet_core::entities::PendingIntent;
use wallet_core::error::DomainError;
use wallet_core::traits::{PendingIntentStore, RepoResult};

use crate::pool::{RedisPoolError, SharedRedisPool};

/// Key prefix for pending intents
const PENDING_INTENT_PREFIX: &str = "pending_intent:";

/// Default TTL for pending intents (24 hours)
const DEFAULT_PENDING_INTENT_TTL: u64 = 24 * 60 * 60;

/// Redis-backed pending intent store
#[derive(Clone)]
pub struct RedisPendingIntentStore {
    pool: SharedRedisPool,
    ttl_seconds: u64,
}

impl RedisPendingIntentStore {
    /// Create a store with the default TTL
    #[must_use]
    pub fn new(pool: SharedRedisPool) -> Self {
        Self::with_ttl(pool, DEFAULT_PENDING_INTENT_TTL)
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: SharedRedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(chat_id: i64) -> String {
        format!("{PENDING_INTENT_PREFIX}{chat_id}")
    }
}

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

#[async_trait]
impl PendingIntentStore for RedisPendingIntentStore {
    async fn put(&self, intent: &PendingIntent) -> RepoResult<()> {
        self.pool
            .set(&Self::key(intent.chat_id), intent, Some(self.ttl_seconds))
            .await
            .map_err(map_cache_error)?;

        tracing::debug!(
            chat_id = intent.chat_id,
            method = %intent.method,
            amount = %intent.amount,
            "Stored pending intent"
        );

        Ok(())
    }

    async fn get(&self, chat_id: i64) -> RepoResult<Option<PendingIntent>> {
        self.pool
            .get_value(&Self::key(chat_id))
            .await
            .map_err(map_cache_error)
    }

    async fn remove(&self, chat_id: i64) -> RepoResult<bool> {
        self.pool
            .delete(&Self::key(chat_id))
            .await
            .map_err(map_cache_error)
    }
}
