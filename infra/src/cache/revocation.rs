//! Redis-backed revocation store for signed-out sessions
//!
//! Each entry is keyed by the canonical claims encoding of a revoked token
//! and expires in Redis at the same moment the token itself would have
//! expired. Store failures surface as `DomainError::StoreUnavailable` so
//! callers fail closed; an unreachable store must never read as "not
//! revoked".

use async_trait::async_trait;

use gk_core::errors::DomainError;
use gk_core::repositories::RevocationStore;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Key prefix namespacing revocation entries in a shared Redis
const REVOCATION_KEY_PREFIX: &str = "revoked:";

/// Redis implementation of the revocation store
#[derive(Clone)]
pub struct RedisRevocationStore {
    /// Redis client for cache operations
    redis_client: RedisClient,
}

impl RedisRevocationStore {
    /// Create a new Redis revocation store
    ///
    /// # Arguments
    /// * `redis_client` - Redis client for cache operations
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    /// Prefix a revocation key for storage
    ///
    /// The prefix keeps revocation entries apart from anything else living
    /// in the same Redis. Callers never see prefixed keys; both trait
    /// operations apply the same mapping.
    pub(crate) fn format_key(key: &str) -> String {
        format!("{}{}", REVOCATION_KEY_PREFIX, key)
    }

    fn store_error(err: InfrastructureError) -> DomainError {
        DomainError::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError> {
        self.redis_client
            .set_with_expiry(&Self::format_key(key), value, ttl_seconds)
            .await
            .map_err(Self::store_error)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.redis_client
            .get(&Self::format_key(key))
            .await
            .map_err(Self::store_error)
    }
}
