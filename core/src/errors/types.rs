//! Domain-specific error types for authentication and token operations
//!
//! This module provides error type definitions for sign-in, registration and
//! session token handling. How each variant is rendered (status code, error
//! code, message) is decided in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username or wrong password. Both cases share one variant so
    /// responses cannot be used to probe which usernames exist.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is not verified")]
    AccountNotVerified,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Email or username already in use")]
    AccountExists,

    #[error("Verification email could not be delivered")]
    NotificationFailed,
}

/// Token-related errors
///
/// Every way a presented token can be rejected maps to exactly one variant.
/// `Revoked` is deliberately distinct from `Expired` and from a generic
/// not-found: a signed-out token is structurally valid and unexpired, and
/// monitoring needs to see it as its own case.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,

    #[error("Token generation failed")]
    GenerationFailed,
}
