//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wallet_api::{create_app, create_app_state};
use wallet_common::AppConfig;

/// Header carrying the admin secret
pub const ADMIN_HEADER: &str = "X-Secret-Key";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub admin_secret: String,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let admin_secret = config.admin.secret.clone();

        // Connects, migrates and wires the real backends
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            admin_secret,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with a session token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }

    /// Make a GET request with the admin secret
    pub async fn get_admin(&self, path: &str) -> Result<Response> {
        Ok(self.admin(self.client.get(self.url(path))).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a session token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with the admin secret
    pub async fn post_admin<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .admin(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?)
    }

    fn admin(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(ADMIN_HEADER, &self.admin_secret)
    }
}

/// Create a test configuration
///
/// Starts from the environment (and `.env`); secrets and the port get test
/// defaults so only the store URLs are mandatory.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut vars: HashMap<String, String> = std::env::vars().collect();
    let defaults = [
        ("API_PORT", "0"),
        ("JWT_SECRET", "integration-test-secret-key"),
        ("ADMIN_SECRET", "integration-admin-secret"),
        (
            "DATABASE_MIGRATIONS_DIR",
            concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations"),
        ),
    ];
    for (key, value) in defaults {
        vars.entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    AppConfig::from_map(&vars).map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
