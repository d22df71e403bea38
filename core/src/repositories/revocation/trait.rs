//! Revocation store trait defining the interface for the token exception list.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store trait for revocation entries with native per-entry expiry
///
/// A revocation entry marks a still-valid token as administratively dead.
/// Implementations must provide atomic insert-with-TTL and read operations
/// that are safe under arbitrary concurrent access, and must expire entries
/// themselves once the TTL elapses; nothing in the domain ever deletes an
/// entry explicitly.
///
/// Once an insert has been acknowledged, any later `get` for the same key
/// must observe it. A backend that cannot reach the store must fail the
/// operation; it must never report a key as absent, since callers treat
/// absence as "not revoked".
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Insert an entry that the store expires on its own after `ttl_seconds`
    ///
    /// Re-inserting an existing key overwrites it; last write wins.
    ///
    /// # Arguments
    /// * `key` - Canonical claims serialization identifying the token
    /// * `value` - Sentinel recorded for the entry
    /// * `ttl_seconds` - Seconds until the store drops the entry
    ///
    /// # Returns
    /// * `Ok(())` - Entry acknowledged by the store
    /// * `Err(DomainError)` - Store unreachable or rejected the write
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError>;

    /// Look up an entry by key
    ///
    /// # Arguments
    /// * `key` - Canonical claims serialization identifying the token
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Entry present and not yet expired
    /// * `Ok(None)` - No live entry for the key
    /// * `Err(DomainError)` - Store unreachable
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
}
