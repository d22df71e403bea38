//! Cache module for the Redis-backed revocation list
//!
//! This module provides the Redis client used by the Gatekey backend and the
//! revocation store implementation that keeps signed-out sessions rejectable
//! until their tokens expire.

pub mod redis_client;
pub mod revocation;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use revocation::RedisRevocationStore;

// Re-export commonly used types
pub use gk_shared::config::cache::CacheConfig;
