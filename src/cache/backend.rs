//! Backend Trait Module
//!
//! The byte-level contract every cache backend fulfils.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::EntryOptions;
use crate::error::StoreError;

// == Distributed Cache ==
/// A key/value byte store with per-entry expiration.
///
/// Implementations own storage, eviction, transport and any timeouts. The
/// typed layer only ever calls these two methods.
#[async_trait]
pub trait DistributedCache: Send + Sync {
    /// Fetches the bytes stored under `key`, or `None` when there is no entry.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, replacing any existing entry.
    async fn set(&self, key: &str, value: Vec<u8>, options: EntryOptions)
        -> Result<(), StoreError>;
}

#[async_trait]
impl<C> DistributedCache for Arc<C>
where
    C: DistributedCache + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key).await
    }

    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        options: EntryOptions,
    ) -> Result<(), StoreError> {
        (**self).set(key, value, options).await
    }
}

#[async_trait]
impl<'a, C> DistributedCache for &'a C
where
    C: DistributedCache + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key).await
    }

    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        options: EntryOptions,
    ) -> Result<(), StoreError> {
        (**self).set(key, value, options).await
    }
}
