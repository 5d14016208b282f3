//! Application configuration structs
//!
//! Built once at startup from environment variables (and a `.env` file when
//! present), then passed by reference to every component.

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub session: SessionConfig,
    pub admin: AdminConfig,
    pub telegram: TelegramConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Directory holding the SQL migrations applied at startup
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
    /// Lifetime of a pending intent, in seconds
    #[serde(default = "default_pending_intent_ttl")]
    pub pending_intent_ttl: u64,
}

/// Session token configuration
#[derive(Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    /// Token validity window in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

/// Shared admin secret configuration
#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    pub secret: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig").finish_non_exhaustive()
    }
}

/// Telegram notification configuration
#[derive(Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token; notifications are disabled when unset
    #[serde(default)]
    pub bot_token: Option<String>,
    #[serde(default = "default_telegram_api_base")]
    pub api_base: String,
    #[serde(default = "default_notify_timeout")]
    pub timeout_secs: u64,
}

impl TelegramConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.bot_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("enabled", &self.is_enabled())
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "wallet-ledger".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_pending_intent_ttl() -> u64 {
    86_400 // 24 hours
}

fn default_token_expiry() -> i64 {
    86_400 // 24 hours
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_notify_timeout() -> u64 {
    10
}

/// The limiter replenishes at millisecond granularity
const MAX_REQUESTS_PER_SECOND: u32 = 1000;

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an in-memory map of variables
    ///
    /// # Errors
    /// Returns an error if required variables are missing or invalid
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                Some(_) => Err(ConfigError::InvalidValue(key, "must not be empty".to_string())),
                None => Err(ConfigError::MissingVar(key)),
            }
        };

        let requests_per_second: u32 = parse_or(
            &lookup,
            "RATE_LIMIT_REQUESTS_PER_SECOND",
            default_requests_per_second,
        );
        if !(1..=MAX_REQUESTS_PER_SECOND).contains(&requests_per_second) {
            return Err(ConfigError::InvalidValue(
                "RATE_LIMIT_REQUESTS_PER_SECOND",
                format!("{requests_per_second} (must be 1..={MAX_REQUESTS_PER_SECOND})"),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_required("API_PORT", &required("API_PORT")?)?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", default_min_connections),
                migrations_dir: lookup("DATABASE_MIGRATIONS_DIR").unwrap_or_else(default_migrations_dir),
            },
            redis: RedisConfig {
                url: required("REDIS_URL")?,
                max_connections: parse_or(&lookup, "REDIS_MAX_CONNECTIONS", default_redis_max_connections),
                pending_intent_ttl: parse_or(&lookup, "PENDING_INTENT_TTL", default_pending_intent_ttl),
            },
            session: SessionConfig {
                secret: required("JWT_SECRET")?,
                token_expiry: parse_or(&lookup, "SESSION_TOKEN_EXPIRY", default_token_expiry),
            },
            admin: AdminConfig {
                secret: required("ADMIN_SECRET")?,
            },
            telegram: TelegramConfig {
                bot_token: lookup("TELEGRAM_BOT_TOKEN").filter(|t| !t.trim().is_empty()),
                api_base: lookup("TELEGRAM_API_BASE").unwrap_or_else(default_telegram_api_base),
                timeout_secs: parse_or(&lookup, "NOTIFY_TIMEOUT_SECS", default_notify_timeout),
            },
            rate_limit: RateLimitConfig {
                requests_per_second,
                burst: parse_or(&lookup, "RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

fn parse_required<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key, raw.to_string()))
}

fn parse_or<T, F, D>(lookup: &F, key: &str, default: D) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
