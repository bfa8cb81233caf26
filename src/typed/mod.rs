//! Typed Module
//!
//! JSON-typed access on top of any [`DistributedCache`](crate::cache::DistributedCache).

mod adapter;


pub use adapter::TypedCache;
