//! Authentication service module
//!
//! This module provides the account lifecycle up to an issued session token:
//! - Registration with email verification
//! - One-time verification key handling
//! - Password sign-in issuing the signed session token

mod config;
mod notifier;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use notifier::Notifier;
pub use service::AuthService;
