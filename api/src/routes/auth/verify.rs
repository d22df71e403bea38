use actix_web::{web, HttpResponse};

use crate::dto::auth::{AccountResponse, VerifyQuery};
use crate::handlers::error::handle_domain_error;

use gk_core::repositories::{AccountRepository, RevocationStore};
use gk_core::services::Notifier;

use super::AppState;

/// Handler for GET /api/v1/auth/verify
///
/// Consumes the one-time key from the emailed verification link and marks
/// the pending account as verified. A key that has already been used
/// answers the same way as one that never existed.
///
/// # Query Parameters
///
/// ```text
/// ?key={verification_key}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "username": "crusty_crab",
///     "email": "crab@example.com",
///     "is_verified": true,
///     "created_at": "2025-08-14T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 404 Not Found: Unknown or already-consumed verification key
pub async fn verify<A, N, R>(
    state: web::Data<AppState<A, N, R>>,
    query: web::Query<VerifyQuery>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    N: Notifier + 'static,
    R: RevocationStore + 'static,
{
    match state.auth_service.verify_account(&query.key).await {
        Ok(account) => HttpResponse::Ok().json(AccountResponse::from(&account)),
        Err(error) => handle_domain_error(&error),
    }
}
