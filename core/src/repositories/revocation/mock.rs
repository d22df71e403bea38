//! In-memory implementation of RevocationStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::trait_::RevocationStore;

/// In-memory revocation store for testing
///
/// Entries are dropped lazily: an expired entry is removed the next time it
/// is read, which matches the observable behavior of a store with native
/// expiry.
pub struct MemoryRevocationStore {
    entries: Arc<RwLock<HashMap<String, (String, Instant)>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryRevocationStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent operation fail as a store outage
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of live (unexpired) entries
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.values().filter(|(_, expires_at)| *expires_at > now).count()
    }

    /// Remaining lifetime of a live entry, in whole seconds
    pub async fn ttl_of(&self, key: &str) -> Option<u64> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.get(key).and_then(|(_, expires_at)| {
            if *expires_at > now {
                Some((*expires_at - now).as_secs())
            } else {
                None
            }
        })
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                message: "simulated revocation store outage".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MemoryRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError> {
        self.check_available()?;
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check_available()?;
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                // Lapsed entry, drop it like the real store would
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}
