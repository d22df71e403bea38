//! Session verification middleware for protected endpoints.
//!
//! The middleware pulls the bearer token out of the request, runs it through
//! the session service (structure, signature, expiry, revocation) and injects
//! the verified claims into request extensions, where the [`SessionContext`]
//! extractor hands them to the route handler.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use gk_core::{
    domain::entities::token::Claims,
    errors::{AuthError, DomainError, DomainResult},
    repositories::RevocationStore,
    services::SessionService,
};

use crate::handlers::error::ApiError;

/// Header carrying a bare session token. Checked before `Authorization`.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Trait wrapping the session service for dynamic dispatch
///
/// The middleware cannot name the concrete revocation store without turning
/// every wrapped route into a generic, so the app registers the session
/// service behind this trait object instead.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> DomainResult<Claims>;
}

#[async_trait]
impl<R: RevocationStore + 'static> SessionAuthenticator for SessionService<R> {
    async fn authenticate(&self, token: &str) -> DomainResult<Claims> {
        SessionService::authenticate(self, token).await
    }
}

/// Session verification middleware factory
pub struct SessionAuth;

impl SessionAuth {
    /// Creates a new session verification middleware
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session verification middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    return Err(
                        ApiError::from(DomainError::Auth(AuthError::Unauthenticated)).into(),
                    );
                }
            };

            let authenticator = match req.app_data::<web::Data<Arc<dyn SessionAuthenticator>>>() {
                Some(authenticator) => authenticator.get_ref().clone(),
                None => {
                    return Err(ApiError::from(DomainError::Internal {
                        message: "Session authenticator not registered in app data".to_string(),
                    })
                    .into());
                }
            };

            match authenticator.authenticate(&token).await {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service.call(req).await
                }
                Err(error) => Err(ApiError::from(error).into()),
            }
        })
    }
}

/// Extracts the session token from the request headers
///
/// `x-access-token` carries the bare token and wins when both headers are
/// present; otherwise the standard `Authorization: Bearer` form is used.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(value) = req.headers().get(ACCESS_TOKEN_HEADER) {
        if let Ok(token) = value.to_str() {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Verified session claims for the current request
///
/// Extraction only succeeds behind [`SessionAuth`]; anywhere else the request
/// extensions are empty and the handler gets the same unauthenticated error
/// the middleware produces.
#[derive(Debug, Clone)]
pub struct SessionContext(pub Claims);

impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .map(SessionContext)
            .ok_or_else(|| {
                ApiError::from(DomainError::Auth(AuthError::Unauthenticated)).into()
            });

        ready(result)
    }
}
