use actix_web::HttpResponse;

use crate::dto::auth::MeResponse;
use crate::middleware::auth::SessionContext;

/// Handler for GET /api/v1/auth/me
///
/// Returns the identity carried by the verified session token. Lets a
/// client confirm that a stored token is still accepted without touching
/// any other resource.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "username": "crusty_crab"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, expired or revoked token
pub async fn me(session: SessionContext) -> HttpResponse {
    let SessionContext(claims) = session;

    HttpResponse::Ok().json(MeResponse {
        id: claims.id,
        username: claims.username,
    })
}
