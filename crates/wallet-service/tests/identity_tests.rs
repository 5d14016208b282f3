//! Identity service behaviour over in-memory backends

use rust_decimal::Decimal;

use wallet_common::AppError;
use wallet_core::error::DomainError;
use wallet_service::dto::{LinkChatRequest, LoginRequest, RegisterRequest};
use wallet_service::testing::TestHarness;
use wallet_service::{IdentityService, LedgerService, ServiceError};

fn register_request(username: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);

    let user = identity.register(register_request("ana", "pw1")).await.unwrap();
    assert_eq!(user.username, "ana");
    assert_eq!(user.balance, Decimal::ZERO);

    let stored = harness.ledger.stored_hash("ana").unwrap();
    assert_ne!(stored, "pw1");
    assert!(stored.starts_with("$argon2id"));

    let username = identity.authenticate("ana", "pw1").await.unwrap();
    assert_eq!(username, "ana");
}

#[tokio::test]
async fn test_username_is_trimmed() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);

    let user = identity.register(register_request("  ana ", "pw1")).await.unwrap();
    assert_eq!(user.username, "ana");
    assert_eq!(identity.authenticate(" ana", "pw1").await.unwrap(), "ana");
}

#[tokio::test]
async fn test_blank_fields_rejected() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);

    let err = identity.register(register_request("   ", "pw1")).await.unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = identity.register(register_request("ana", "  ")).await.unwrap_err();
    assert_eq!(err.status_code(), 400);

    assert!(harness.ledger.stored_hash("ana").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_keeps_first() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);

    identity.register(register_request("ana", "pw1")).await.unwrap();
    let first_hash = harness.ledger.stored_hash("ana").unwrap();

    let err = identity.register(register_request("ana", "other")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::UsernameTaken(_))));
    assert_eq!(err.status_code(), 409);

    assert_eq!(harness.ledger.stored_hash("ana").unwrap(), first_hash);
    assert!(identity.authenticate("ana", "pw1").await.is_ok());

    let balance = LedgerService::new(&harness.ctx).get_balance("ana").await.unwrap();
    assert_eq!(balance.balance, Decimal::ZERO);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration() {
    let harness = TestHarness::new();

    let attempts = (0..8).map(|i| {
        let ctx = harness.ctx.clone();
        tokio::spawn(async move {
            IdentityService::new(&ctx)
                .register(register_request("ana", &format!("pw{i}")))
                .await
        })
    });
    let results = futures::future::join_all(attempts).await;

    let created = results
        .into_iter()
        .map(|r| r.unwrap())
        .filter(Result::is_ok)
        .count();
    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);
    identity.register(register_request("ana", "pw1")).await.unwrap();

    let wrong_password = identity.authenticate("ana", "nope").await.unwrap_err();
    let unknown_user = identity.authenticate("ghost", "pw1").await.unwrap_err();

    for err in [wrong_password, unknown_user] {
        assert!(matches!(err, ServiceError::App(AppError::InvalidCredentials)));
        assert_eq!(err.status_code(), 401);
    }
}

#[tokio::test]
async fn test_login_issues_valid_session() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);
    identity.register(register_request("ana", "pw1")).await.unwrap();

    let login = identity
        .login(LoginRequest {
            username: "ana".to_string(),
            password: "pw1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(login.token_type, "Bearer");
    assert_eq!(login.expires_in, 86_400);
    assert_eq!(identity.validate_session(&login.access_token).unwrap(), "ana");
    assert!(identity.validate_session("garbage").is_err());
}

#[tokio::test]
async fn test_bind_chat_first_write_wins() {
    let harness = TestHarness::new();
    let identity = IdentityService::new(&harness.ctx);
    identity.register(register_request("ana", "pw1")).await.unwrap();
    identity.register(register_request("bob", "pw2")).await.unwrap();

    let link = |username: &str, chat_id: i64| LinkChatRequest {
        username: username.to_string(),
        chat_id,
    };

    let first = identity.bind_chat(link("ana", 100)).await.unwrap();
    assert!(first.newly_bound);
    assert_eq!(first.chat_id, 100);

    let second = identity.bind_chat(link("ana", 200)).await.unwrap();
    assert!(!second.newly_bound);
    assert_eq!(second.chat_id, 100);

    let err = identity.bind_chat(link("bob", 100)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::ChatAlreadyBound(100))));

    let err = identity.bind_chat(link("ghost", 300)).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}
