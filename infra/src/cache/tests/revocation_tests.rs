//! Unit tests for the Redis revocation store

use gk_core::repositories::RevocationStore;
use gk_shared::config::cache::CacheConfig;

use crate::cache::{RedisClient, RedisRevocationStore};

#[test]
fn test_format_key_applies_prefix() {
    let claims_key = r#"{"id":"abc","username":"crusty_crab"}"#;

    let stored = RedisRevocationStore::format_key(claims_key);
    assert_eq!(stored, format!("revoked:{}", claims_key));
}

#[test]
fn test_format_key_is_stable() {
    // Both trait operations must derive the identical storage key,
    // otherwise a revoked token would pass authentication.
    let claims_key = r#"{"id":"abc","iat":1700000000,"exp":1700086400}"#;

    assert_eq!(
        RedisRevocationStore::format_key(claims_key),
        RedisRevocationStore::format_key(claims_key)
    );
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_revocation_round_trip() {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );

    let client = RedisClient::new(&config).await.unwrap();
    let store = RedisRevocationStore::new(client);

    let key = r#"{"id":"test","username":"crusty_crab","iat":1,"exp":2}"#;

    store.set_with_ttl(key, "invalid", 60).await.unwrap();

    let entry = store.get(key).await.unwrap();
    assert_eq!(entry.as_deref(), Some("invalid"));

    let absent = store.get("never-stored").await.unwrap();
    assert_eq!(absent, None);
}
