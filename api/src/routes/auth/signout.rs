use actix_web::{web, HttpResponse};

use crate::dto::auth::SignoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::SessionContext;

use gk_core::repositories::{AccountRepository, RevocationStore};
use gk_core::services::Notifier;

use super::AppState;

/// Handler for POST /api/v1/auth/signout
///
/// Revokes the presented session token for the rest of its lifetime. The
/// route sits behind the session middleware, so the token has already been
/// verified by the time the handler runs. Signing the same token out twice
/// is safe.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {session_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Signed out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, expired or already-revoked token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn signout<A, N, R>(
    state: web::Data<AppState<A, N, R>>,
    session: SessionContext,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    N: Notifier + 'static,
    R: RevocationStore + 'static,
{
    match state.session_service.sign_out(&session.0).await {
        Ok(()) => HttpResponse::Ok().json(SignoutResponse {
            message: "Signed out successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
