//! Typed Cache - JSON-typed helpers over a distributed byte cache
//!
//! Stores strongly-typed values as UTF-8 JSON in any backend implementing
//! [`DistributedCache`], with get, set and get-or-create operations.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;
pub mod typed;

pub use cache::{DistributedCache, EntryOptions, MemoryCache};
pub use config::Config;
pub use error::{CacheError, DecodeError, GetOrCreateError, Result, StoreError};
pub use tasks::spawn_cleanup_task;
pub use typed::TypedCache;
