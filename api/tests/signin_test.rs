//! Integration tests for the signin endpoint

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

fn key_from_link(link: &str) -> String {
    link.split("key=")
        .nth(1)
        .expect("verification link should carry a key")
        .to_string()
}

/// Register an account and complete its email verification
async fn register_and_verify(ctx: &TestContext, username: &str, email: &str, password: &str) {
    ctx.app_state
        .auth_service
        .register(username, email, password)
        .await
        .expect("registration should succeed");

    let key = key_from_link(&ctx.mailer.last_link().unwrap());
    ctx.app_state
        .auth_service
        .verify_account(&key)
        .await
        .expect("verification should succeed");
}

#[actix_web::test]
async fn test_signin_issues_session_token() {
    let ctx = test_context();
    register_and_verify(&ctx, "crusty_crab", "crab@example.com", "shell-secret").await;
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signin")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["expires_in"], 86400);

    let token = body["token"].as_str().expect("token should be a string");
    assert_eq!(token.matches('.').count(), 2, "token should be a three-part JWT");
}

#[actix_web::test]
async fn test_signin_unknown_user_and_wrong_password_answer_identically() {
    let ctx = test_context();
    register_and_verify(&ctx, "crusty_crab", "crab@example.com", "shell-secret").await;
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signin")
        .set_json(serde_json::json!({
            "username": "no_such_crab",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let unknown_user: serde_json::Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signin")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "password": "wrong-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let wrong_password: serde_json::Value = test::read_body_json(resp).await;

    // The two failures are indistinguishable apart from the timestamp
    assert_eq!(unknown_user["error"], "INVALID_CREDENTIALS");
    assert_eq!(unknown_user["error"], wrong_password["error"]);
    assert_eq!(unknown_user["message"], wrong_password["message"]);
    assert_eq!(unknown_user["message"], "Invalid username or password");
}

#[actix_web::test]
async fn test_signin_requires_verified_account() {
    let ctx = test_context();
    ctx.app_state
        .auth_service
        .register("crusty_crab", "crab@example.com", "shell-secret")
        .await
        .unwrap();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signin")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_NOT_VERIFIED");
}

#[actix_web::test]
async fn test_signin_checks_password_before_verification_state() {
    let ctx = test_context();
    ctx.app_state
        .auth_service
        .register("crusty_crab", "crab@example.com", "shell-secret")
        .await
        .unwrap();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    // A wrong password on an unverified account reveals nothing about the
    // account's verification state.
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signin")
        .set_json(serde_json::json!({
            "username": "crusty_crab",
            "password": "wrong-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[actix_web::test]
async fn test_signin_rejects_missing_fields() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signin")
        .set_json(serde_json::json!({
            "username": "",
            "password": "shell-secret"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["username"].is_array());
}
