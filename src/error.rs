//! Error types for the typed cache layer
//!
//! Provides unified error handling using thiserror. Backend failures, JSON
//! encoding failures and decoding failures are kept as separate variants so
//! callers can tell a bad value apart from an unreachable store.

use std::time::Duration;

use thiserror::Error;

// == Store Error ==
/// Error reported by a [`DistributedCache`](crate::cache::DistributedCache) backend.
///
/// The typed layer never inspects or rewraps these; they reach the caller
/// unchanged inside [`CacheError::Store`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend could not be reached
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Backend did not answer in time
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// Backend refused the entry (size limits, invalid key, ...)
    #[error("Entry rejected: {0}")]
    Rejected(String),

    /// Any other backend fault
    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

// == Decode Error ==
/// Why a present, non-empty entry could not be turned back into a value.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Stored bytes are not UTF-8 text
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Stored text is not JSON of the requested type
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// == Cache Error Enum ==
/// Unified error type for typed cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value could not be converted to JSON
    #[error("Failed to serialize value for key {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes could not be converted back into the requested type
    #[error("Failed to decode value for key {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    /// Underlying cache operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CacheError {
    /// Returns true for JSON encoding failures.
    pub fn is_serialization(&self) -> bool {
        matches!(self, CacheError::Serialization { .. })
    }

    /// Returns true for UTF-8 or JSON decoding failures.
    pub fn is_decode(&self) -> bool {
        matches!(self, CacheError::Decode { .. })
    }

    /// Returns true for failures reported by the backend.
    pub fn is_store(&self) -> bool {
        matches!(self, CacheError::Store(_))
    }

    /// Key of the offending entry, when the error is tied to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            CacheError::Serialization { key, .. } | CacheError::Decode { key, .. } => Some(key),
            CacheError::Store(_) => None,
        }
    }
}

// == Get Or Create Error ==
/// Error from a fallible get-or-create call.
///
/// Keeps the factory's own error type intact instead of flattening it into
/// [`CacheError`].
#[derive(Error, Debug)]
pub enum GetOrCreateError<E> {
    /// Reading or writing the cache failed
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The factory failed; nothing was written
    #[error("Factory failed: {0}")]
    Factory(#[source] E),
}

// == Result Type Alias ==
/// Convenience Result type for typed cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
