//! Cache Module
//!
//! The byte-oriented cache contract consumed by the typed layer, plus an
//! in-process backend with TTL expiration for local development and tests.

mod backend;
mod entry;
mod memory;
mod options;

// Re-export public types
pub use backend::DistributedCache;
pub use entry::MemoryEntry;
pub use memory::MemoryCache;
pub use options::EntryOptions;

// == Public Constants ==
/// Maximum key length accepted by [`MemoryCache`], in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum value size accepted by [`MemoryCache`], in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
