//! Pending recharge intents keyed by chat.

mod pending_intent;

pub use pending_intent::RedisPendingIntentStore;
