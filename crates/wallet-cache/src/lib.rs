//! # wallet-cache
//!
//! Redis layer for short-lived state: the pending recharge intent each chat
//! declares before sending a receipt.
//!
//! ## Example
//!
//! ```ignore
//! use wallet_cache::{create_shared_pool, RedisPendingIntentStore, RedisPoolConfig};
//!
//! let pool = create_shared_pool(RedisPoolConfig::from(&config.redis))?;
//! let intents = RedisPendingIntentStore::with_ttl(pool.clone(), config.redis.pending_intent_ttl);
//! intents.put(&PendingIntent::new(chat_id, "YAPE".into(), amount)).await?;
//! ```

pub mod intent;
pub mod pool;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export store types
pub use intent::RedisPendingIntentStore;
