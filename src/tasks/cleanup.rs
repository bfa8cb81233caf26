//! TTL Cleanup Task
//!
//! Background task that periodically removes expired in-memory entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Shortest pause between sweeps; smaller intervals are raised to this.
pub const MIN_CLEANUP_INTERVAL: Duration = Duration::from_millis(10);

/// Spawns a background task that periodically sweeps expired entries.
///
/// Reads already skip expired entries, so the sweep only bounds memory held
/// by keys nobody reads again.
///
/// # Arguments
/// * `cache` - Handle to the cache; clones share the same entries
/// * `interval` - Time between sweeps, at least [`MIN_CLEANUP_INTERVAL`]
///
/// # Returns
/// A JoinHandle for the spawned task, to be aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = MemoryCache::new();
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: MemoryCache, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(MIN_CLEANUP_INTERVAL);

    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{DistributedCache, EntryOptions};

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = MemoryCache::new();
        cache
            .set("expire_soon", b"value".to_vec(), EntryOptions::expires_in(Duration::from_secs(1)))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));

        // Let the deadline pass and the sweep run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(cache.is_empty().await, "Expired entry should have been swept");
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = MemoryCache::new();
        cache
            .set("long_lived", b"value".to_vec(), EntryOptions::expires_in(Duration::from_secs(3600)))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.len().await, 1, "Valid entry should not be removed");
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryCache::new(), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_zero_interval_is_raised_to_minimum() {
        let cache = MemoryCache::new();
        cache
            .set("brief", b"value".to_vec(), EntryOptions::expires_in(Duration::from_millis(1)))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), Duration::ZERO);

        // Expired, but no sweep has run before the minimum interval
        tokio::time::sleep(MIN_CLEANUP_INTERVAL / 2).await;
        assert_eq!(cache.len().await, 1);

        tokio::time::sleep(MIN_CLEANUP_INTERVAL).await;
        assert!(cache.is_empty().await, "Sweep should run at the minimum interval");
        assert!(!handle.is_finished());

        handle.abort();
    }
}
