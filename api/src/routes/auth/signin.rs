use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{SigninRequest, SigninResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use gk_core::repositories::{AccountRepository, RevocationStore};
use gk_core::services::Notifier;

use super::AppState;

/// Handler for POST /api/v1/auth/signin
///
/// Authenticates a username/password pair and issues a signed session token
/// valid for 24 hours.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "crusty_crab",
///     "password": "shell-secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "expires_in": 86400
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Username or password missing from the body
/// - 401 Unauthorized: Unknown username, wrong password (both answered
///   identically), or an account that has not completed verification
pub async fn signin<A, N, R>(
    state: web::Data<AppState<A, N, R>>,
    request: web::Json<SigninRequest>,
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
        .sign_in(&request.username, &request.password)
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(SigninResponse {
            token: issued.token,
            expires_in: issued.expires_in,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
