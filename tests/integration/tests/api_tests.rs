//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

async fn register_and_login(server: &TestServer, creds: &Credentials) -> String {
    let response = server.post("/api/auth/register", creds).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/auth/login", creds).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    login.access_token
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Identity Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    let response = server.post("/api/auth/register", &creds).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/auth/login", &creds).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.username, creds.username);
    assert_eq!(login.token_type, "Bearer");
    assert!(login.expires_in > 0);
}

#[tokio::test]
async fn test_duplicate_registration() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    register_and_login(&server, &creds).await;

    let again = Credentials {
        password: "different".to_string(),
        ..creds.clone()
    };
    let response = server.post("/api/auth/register", &again).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "USERNAME_TAKEN");

    // The first password still works
    let response = server.post("/api/auth/login", &creds).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/auth/login", &Credentials::unique())
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.error.code, "INVALID_CREDENTIALS");
}

// ============================================================================
// Ledger Tests
// ============================================================================

#[tokio::test]
async fn test_credit_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    let token = register_and_login(&server, &creds).await;

    let response = server.get_auth("/api/balance", &token).await.unwrap();
    let balance: BalanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.balance, Decimal::ZERO);

    let credit = CreditRequest {
        method: Some("YAPE".to_string()),
        ..CreditRequest::new(&creds.username, Decimal::from(50))
    };
    let response = server.post_admin("/api/admin/credit", &credit).await.unwrap();
    let receipt: CreditResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.new_balance, Decimal::from(50));
    assert_eq!(receipt.transaction.status, "credited");

    let response = server.get_auth("/api/balance", &token).await.unwrap();
    let balance: BalanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.balance, Decimal::from(50));

    let ghost = CreditRequest::new(&unique_username("ghost"), Decimal::from(50));
    let response = server.post_admin("/api/admin/credit", &ghost).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_concurrent_credits() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    register_and_login(&server, &creds).await;

    let credits = (1..=10).map(|i| {
        let body = CreditRequest::new(&creds.username, Decimal::from(i));
        let server = &server;
        async move { server.post_admin("/api/admin/credit", &body).await }
    });
    for response in futures::future::join_all(credits).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let path = format!("/api/admin/users/{}/reconcile", creds.username);
    let response = server.get_admin(&path).await.unwrap();
    let rec: ReconciliationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rec.balance, Decimal::from(55));
    assert_eq!(rec.credited_total, Decimal::from(55));
    assert_eq!(rec.credited_count, 10);
    assert!(rec.consistent);
}

#[tokio::test]
async fn test_credit_requires_admin_secret() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    register_and_login(&server, &creds).await;

    let credit = CreditRequest::new(&creds.username, Decimal::from(10));
    let response = server.post("/api/admin/credit", &credit).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.error.code, "INVALID_ADMIN_SECRET");
}

// ============================================================================
// Recharge Tests
// ============================================================================

#[tokio::test]
async fn test_recharge_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    let token = register_and_login(&server, &creds).await;

    let request = RechargeRequest {
        method: "YAPE".to_string(),
        amount: Decimal::new(2000, 2),
    };

    let response = server.post("/api/recharges", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post_auth("/api/recharges", &token, &request).await.unwrap();
    let recharge: RechargeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(recharge.transaction.status, "requested");
    assert!(!recharge.notified);

    let response = server.get_auth("/api/transactions", &token).await.unwrap();
    let history: Vec<TransactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].amount, Decimal::from(20));

    let response = server.get_auth("/api/balance", &token).await.unwrap();
    let balance: BalanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.balance, Decimal::ZERO);
}

#[tokio::test]
async fn test_bot_proof_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    let token = register_and_login(&server, &creds).await;
    let chat_id = i64::from(uuid::Uuid::new_v4().as_fields().0 >> 1);

    let response = server
        .post_admin(
            "/api/bot/link",
            &json!({ "username": creds.username, "chat_id": chat_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_admin(
            "/api/bot/intent",
            &json!({ "chat_id": chat_id, "method": "plin", "amount": "30" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_admin(
            "/api/bot/proof",
            &json!({ "chat_id": chat_id, "file_id": "receipt-1" }),
        )
        .await
        .unwrap();
    let row: TransactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(row.username, creds.username);
    assert_eq!(row.method, "PLIN");
    assert_eq!(row.status, "requested");

    let response = server
        .post_admin(
            "/api/bot/proof",
            &json!({ "chat_id": chat_id, "file_id": "receipt-2" }),
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "NO_PENDING_INTENT");

    let response = server.get_auth("/api/balance", &token).await.unwrap();
    let balance: BalanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.balance, Decimal::ZERO);
}
