//! Account and session route handlers
//!
//! This module contains all authentication endpoints:
//! - Account signup and email verification
//! - Password sign-in issuing session tokens
//! - Sign-out (token revocation)
//! - Session introspection

pub mod me;
pub mod signin;
pub mod signout;
pub mod signup;
pub mod verify;

use std::sync::Arc;

use gk_core::repositories::{AccountRepository, RevocationStore};
use gk_core::services::{AuthService, Notifier, SessionService};

/// Application state that holds the shared services
pub struct AppState<A, N, R>
where
    A: AccountRepository,
    N: Notifier,
    R: RevocationStore,
{
    pub auth_service: Arc<AuthService<A, N>>,
    pub session_service: Arc<SessionService<R>>,
}
