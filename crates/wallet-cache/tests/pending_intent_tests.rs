//! Live tests for the Redis pending intent store
//!
//! Require a running Redis; skipped when REDIS_URL is unset.

use rust_decimal::Decimal;

use wallet_cache::{create_shared_pool, RedisPendingIntentStore, RedisPoolConfig};
use wallet_core::entities::PendingIntent;
use wallet_core::traits::PendingIntentStore;

fn get_test_store() -> Option<RedisPendingIntentStore> {
    let url = std::env::var("REDIS_URL").ok()?;
    let pool = create_shared_pool(RedisPoolConfig {
        url,
        max_connections: 4,
    })
    .ok()?;
    Some(RedisPendingIntentStore::with_ttl(pool, 60))
}

fn test_chat_id() -> i64 {
    // Keep clear of real chat ids
    -(i64::from(std::process::id()) * 1000 + 7)
}

#[tokio::test]
async fn test_put_get_remove() {
    let Some(store) = get_test_store() else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };
    let chat_id = test_chat_id();

    let intent = PendingIntent::new(chat_id, "YAPE", Decimal::new(2550, 2));
    store.put(&intent).await.unwrap();

    let loaded = store.get(chat_id).await.unwrap().unwrap();
    assert_eq!(loaded.method, "YAPE");
    assert_eq!(loaded.amount, Decimal::new(2550, 2));

    assert!(store.remove(chat_id).await.unwrap());
    assert!(store.get(chat_id).await.unwrap().is_none());
    assert!(!store.remove(chat_id).await.unwrap());
}

#[tokio::test]
async fn test_last_write_wins() {
    let Some(store) = get_test_store() else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };
    let chat_id = test_chat_id() - 1;

    store
        .put(&PendingIntent::new(chat_id, "YAPE", Decimal::from(10)))
        .await
        .unwrap();
    store
        .put(&PendingIntent::new(chat_id, "PLIN", Decimal::from(20)))
        .await
        .unwrap();

    let loaded = store.get(chat_id).await.unwrap().unwrap();
    assert_eq!(loaded.method, "PLIN");
    assert_eq!(loaded.amount, Decimal::from(20));

    store.remove(chat_id).await.unwrap();
}
