//! Integration tests for the signup and email verification endpoints

use actix_web::{test, web};
use std::sync::Arc;

use gk_api::app::create_app;
use gk_api::routes::auth::AppState;
use gk_core::repositories::{MemoryRevocationStore, MockAccountRepository};
use gk_core::services::{
    AuthService, AuthServiceConfig, SessionService, TokenCodec, TokenCodecConfig,
};
use gk_infra::email::MockMailer;

struct TestContext {
    app_state: web::Data<AppState<MockAccountRepository, MockMailer, MemoryRevocationStore>>,
    mailer: Arc<MockMailer>,
}

fn test_context() -> TestContext {
    let accounts = Arc::new(MockAccountRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let revocations = Arc::new(MemoryRevocationStore::new());

    let token_codec = Arc::new(TokenCodec::new(TokenCodecConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..TokenCodecConfig::default()
    }));

    let auth_service = Arc::new(AuthService::new(
        accounts,
        mailer.clone(),
        token_codec.clone(),
        AuthServiceConfig::default(),
    ));
    let session_service = Arc::new(SessionService::new(token_codec, revocations));

    let app_state = web::Data::new(AppState {
        auth_service,
        session_service,
    });

    TestContext { app_state, mailer }
}

/// Pull the one-time key out of a captured verification link
fn key_from_link(link: &str) -> String {
    link.split("key=")
        .nth(1)
        .expect("verification link should carry a key")
        .to_string()
}

#[actix_web::test]
async fn test_signup_creates_pending_account() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "crusty_crab");
    assert_eq!(body["email"], "crab@example.com");
    assert_eq!(body["is_verified"], false);

    // Credentials and the one-time key never appear in the response
    let raw = body.to_string();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("verify_key"));

    // Exactly one verification email went out, carrying the link
    assert_eq!(ctx.mailer.sent_count(), 1);
    let link = ctx.mailer.last_link().expect("verification link captured");
    assert!(link.starts_with("http://localhost:8080/api/v1/auth/verify?key="));
}

#[actix_web::test]
async fn test_signup_rejects_duplicate_identity() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // Same username, different email
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "other@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_EXISTS");

    // Different username, same email
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "other_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_EXISTS");

    // Only the first registration produced mail
    assert_eq!(ctx.mailer.sent_count(), 1);
}

#[actix_web::test]
async fn test_signup_rejects_invalid_fields() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    // Username too short
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "abc",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["username"].is_array());

    // Email without a domain
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "not-an-email",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Password below the minimum length
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "short"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Nothing was registered, so nothing was mailed
    assert_eq!(ctx.mailer.sent_count(), 0);
}

#[actix_web::test]
async fn test_signup_email_failure_keeps_account() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    ctx.mailer.set_failing(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_DELIVERY_FAILED");

    // The account was persisted despite the delivery failure: re-registering
    // the same identity now reports it as taken.
    ctx.mailer.set_failing(false);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_EXISTS");
}

#[actix_web::test]
async fn test_verify_marks_account_verified() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let key = key_from_link(&ctx.mailer.last_link().unwrap());
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/verify?key={}", key))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "crusty_crab");
    assert_eq!(body["is_verified"], true);
}

#[actix_web::test]
async fn test_verify_key_is_single_use() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "email": "crab@example.com",
            "password": "shell-secret"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let key = key_from_link(&ctx.mailer.last_link().unwrap());
    let uri = format!("/api/v1/auth/verify?key={}", key);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), 200);

    // The key was consumed; presenting it again looks like an unknown key
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_verify_unknown_key_returns_404() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/verify?key=never-issued")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Verification key not found");
}
