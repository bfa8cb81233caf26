//! Memory Cache Module
//!
//! In-process [`DistributedCache`] backed by a shared HashMap with TTL
//! expiration. Entries are never evicted for capacity; expired entries are
//! dropped lazily on read and by the background cleanup task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{DistributedCache, EntryOptions, MemoryEntry, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::config::Config;
use crate::error::StoreError;

// == Memory Cache ==
/// Shared in-memory byte store.
///
/// Cloning is cheap and every clone sees the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    /// Key-value storage
    entries: Arc<RwLock<HashMap<String, MemoryEntry>>>,
    /// Expiration applied to writes whose options leave it unset
    default_ttl: Option<Duration>,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache whose entries never expire unless asked to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache applying `default_ttl` to writes without an
    /// explicit expiration.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::default(),
            default_ttl: Some(default_ttl),
        }
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            entries: Arc::default(),
            default_ttl: config.default_ttl,
        }
    }

    // == Remove ==
    /// Removes an entry by key. Returns true if an entry was present.
    pub async fn remove(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    // == Time To Live ==
    /// Remaining lifetime of a live entry.
    ///
    /// Returns `None` when the key is missing, expired, or never expires.
    pub async fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(MemoryEntry::ttl_remaining)
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet
    /// swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl DistributedCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop it unless a writer replaced it in the meantime
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(MemoryEntry::is_expired) {
            entries.remove(key);
            debug!("Removed expired entry {}", key);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        options: EntryOptions,
    ) -> Result<(), StoreError> {
        // Validate key length
        if key.len() > MAX_KEY_LENGTH {
            return Err(StoreError::Rejected(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        // Validate value size
        if value.len() > MAX_VALUE_SIZE {
            return Err(StoreError::Rejected(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let ttl = options
            .absolute_expiration_relative_to_now
            .or(self.default_ttl);
        let entry = MemoryEntry::new(value, ttl);

        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }
}
