//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: Removes expired [`MemoryCache`](crate::cache::MemoryCache)
//!   entries at configured intervals

mod cleanup;

pub use cleanup::{spawn_cleanup_task, MIN_CLEANUP_INTERVAL};
