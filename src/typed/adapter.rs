//! Typed Cache Adapter
//!
//! Stores values as UTF-8 JSON text in a byte-oriented backend and reads them
//! back as typed values.
//!
//! There is no locking here. Two `get_or_create*` calls racing on the same
//! missing key both run their factory and both write; the last write wins.

use std::convert::Infallible;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{DistributedCache, EntryOptions};
use crate::error::{CacheError, DecodeError, GetOrCreateError, Result};

// == Typed Cache ==
/// Typed view over a byte cache.
///
/// Wraps the backend by value; pass an `Arc<C>` or `&C` to share one backend
/// between several users.
#[derive(Debug, Clone, Default)]
pub struct TypedCache<C> {
    inner: C,
}

impl<C> TypedCache<C>
where
    C: DistributedCache,
{
    // == Constructor ==
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the backend.
    pub fn into_inner(self) -> C {
        self.inner
    }

    // == Set ==
    /// Serializes `value` to JSON and stores it under `key`.
    ///
    /// Overwrites any existing entry. Without `options` the entry is written
    /// with [`EntryOptions::default`], leaving expiration to the backend.
    ///
    /// # Errors
    /// - [`CacheError::Serialization`] if `value` has no JSON form; the
    ///   backend is not called
    /// - [`CacheError::Store`] if the backend write fails
    pub async fn set<T>(&self, key: &str, value: &T, options: Option<EntryOptions>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value).map_err(|source| CacheError::Serialization {
            key: key.to_string(),
            source,
        })?;
        let bytes = json.into_bytes();

        debug!("Writing {} bytes to key {}", bytes.len(), key);
        self.inner
            .set(key, bytes, options.unwrap_or_default())
            .await?;
        Ok(())
    }

    // == Get ==
    /// Fetches the value stored under `key`.
    ///
    /// Returns `Ok(None)` when there is no entry or the entry is empty. A
    /// missing key is never an error.
    ///
    /// # Errors
    /// - [`CacheError::Decode`] if a non-empty entry is not UTF-8 JSON of type `T`
    /// - [`CacheError::Store`] if the backend read fails
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(bytes) = self.inner.get(key).await? else {
            debug!("Cache miss for key {}", key);
            return Ok(None);
        };

        if bytes.is_empty() {
            debug!("Empty entry for key {}, treating as absent", key);
            return Ok(None);
        }

        decode(&bytes).map(Some).map_err(|source| {
            warn!("Failed to decode value for key {}: {}", key, source);
            CacheError::Decode {
                key: key.to_string(),
                source,
            }
        })
    }

    // == Get Or Create ==
    /// Returns the cached value, or builds it with `factory`, stores it with
    /// default options and returns it.
    ///
    /// The factory runs at most once per call and only when the lookup finds
    /// nothing.
    pub async fn get_or_create<T, F>(&self, key: &str, factory: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        self.get_or_create_with_options(key, EntryOptions::default(), factory)
            .await
    }

    /// Like [`get_or_create`](Self::get_or_create), writing a created value
    /// with `options`.
    pub async fn get_or_create_with_options<T, F>(
        &self,
        key: &str,
        options: EntryOptions,
        factory: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        self.get_or_create_async_with_options(key, options, || std::future::ready(factory()))
            .await
    }

    /// Returns the cached value, or awaits `factory`, stores its output with
    /// default options and returns it.
    pub async fn get_or_create_async<T, F, Fut>(&self, key: &str, factory: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.get_or_create_async_with_options(key, EntryOptions::default(), factory)
            .await
    }

    /// Like [`get_or_create_async`](Self::get_or_create_async), writing a
    /// created value with `options`.
    pub async fn get_or_create_async_with_options<T, F, Fut>(
        &self,
        key: &str,
        options: EntryOptions,
        factory: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let result = self
            .try_get_or_create_async_with_options(key, options, move || async move {
                Ok::<T, Infallible>(factory().await)
            })
            .await;

        match result {
            Ok(value) => Ok(value),
            Err(GetOrCreateError::Cache(err)) => Err(err),
            Err(GetOrCreateError::Factory(never)) => match never {},
        }
    }

    // == Try Get Or Create ==
    /// Fallible form of [`get_or_create_async`](Self::get_or_create_async).
    ///
    /// A factory error is returned as [`GetOrCreateError::Factory`] and
    /// nothing is written.
    pub async fn try_get_or_create_async<T, E, F, Fut>(
        &self,
        key: &str,
        factory: F,
    ) -> std::result::Result<T, GetOrCreateError<E>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        self.try_get_or_create_async_with_options(key, EntryOptions::default(), factory)
            .await
    }

    /// Fallible form of
    /// [`get_or_create_async_with_options`](Self::get_or_create_async_with_options).
    pub async fn try_get_or_create_async_with_options<T, E, F, Fut>(
        &self,
        key: &str,
        options: EntryOptions,
        factory: F,
    ) -> std::result::Result<T, GetOrCreateError<E>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        // A miss is an absent value, not an absent cache handle
        if let Some(value) = self.get(key).await? {
            debug!("Cache hit for key {}", key);
            return Ok(value);
        }

        debug!("Populating key {} from factory", key);
        let value = factory().await.map_err(GetOrCreateError::Factory)?;
        self.set(key, &value, Some(options)).await?;
        Ok(value)
    }
}

// == Decoding ==
/// Turns stored bytes into a value: UTF-8 first, then JSON.
fn decode<T>(bytes: &[u8]) -> std::result::Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    let text = std::str::from_utf8(bytes)?;
    Ok(serde_json::from_str(text)?)
}
