use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccountResponse, SignupRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use gk_core::repositories::{AccountRepository, RevocationStore};
use gk_core::services::Notifier;

use super::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Registers a new account and emails it a one-time verification link.
/// The account cannot sign in until the link is followed.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "crusty_crab",
///     "email": "crab@example.com",
///     "password": "shell-secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "username": "crusty_crab",
///     "email": "crab@example.com",
///     "is_verified": false,
///     "created_at": "2025-08-14T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Field validation failed, or username/email already in use
/// - 502 Bad Gateway: Verification email could not be delivered
pub async fn signup<A, N, R>(
    state: web::Data<AppState<A, N, R>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    N: Notifier + 'static,
    R: RevocationStore + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(account) => HttpResponse::Created().json(AccountResponse::from(&account)),
        Err(error) => handle_domain_error(&error),
    }
}
