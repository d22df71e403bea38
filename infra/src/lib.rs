//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Gatekey backend.
//! It provides concrete implementations for account persistence, the session
//! revocation list, and outbound email delivery.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL account repository using SQLx
//! - **Cache**: Redis-backed revocation store for signed-out sessions
//! - **Email**: SMTP delivery of verification mail via lettre
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable the Redis revocation store (default)

// Re-export core types for convenience
pub use gk_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and the revocation store
pub mod cache;

/// Email module - verification mail delivery
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email error: {0}")]
    Email(String),
}
