//! Application factory
//!
//! Builds the Actix-web application with its middleware stack, routes and
//! shared state. The factory is generic over the repository, notifier and
//! revocation store so integration tests can run it against in-memory
//! implementations.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::{SessionAuth, SessionAuthenticator};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    me::me, signin::signin, signout::signout, signup::signup, verify::verify, AppState,
};

use gk_core::repositories::{AccountRepository, RevocationStore};
use gk_core::services::Notifier;
use gk_shared::errors::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
pub fn create_app<A, N, R>(
    app_state: web::Data<AppState<A, N, R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    N: Notifier + 'static,
    R: RevocationStore + 'static,
{
    // Configure CORS for the current environment
    let cors = create_cors();

    // The session middleware looks the service up as a trait object, so it
    // does not have to be generic over the store type.
    let session_authenticator: Arc<dyn SessionAuthenticator> = app_state.session_service.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::Data::new(session_authenticator))
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                // Auth routes
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<A, N, R>))
                        .route("/verify", web::get().to(verify::<A, N, R>))
                        .route("/signin", web::post().to(signin::<A, N, R>))
                        .route(
                            "/signout",
                            web::post().to(signout::<A, N, R>).wrap(SessionAuth::new()),
                        )
                        .route("/me", web::get().to(me).wrap(SessionAuth::new())),
                )
                // API documentation endpoint
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gatekey-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Gatekey API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "signup": {
                    "path": "/api/v1/auth/signup",
                    "method": "POST",
                    "description": "Register an account and send the verification email"
                },
                "verify": {
                    "path": "/api/v1/auth/verify",
                    "method": "GET",
                    "description": "Consume an emailed verification key"
                },
                "signin": {
                    "path": "/api/v1/auth/signin",
                    "method": "POST",
                    "description": "Authenticate credentials and issue a session token"
                },
                "signout": {
                    "path": "/api/v1/auth/signout",
                    "method": "POST",
                    "description": "Revoke the presented session token",
                    "requires_auth": true
                },
                "me": {
                    "path": "/api/v1/auth/me",
                    "method": "GET",
                    "description": "Return the identity behind the presented session token",
                    "requires_auth": true
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
