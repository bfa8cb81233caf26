//! Memory Entry Module
//!
//! Defines the structure for individual in-memory entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Memory Entry ==
/// A single stored byte value with its expiration deadline.
#[derive(Debug, Clone)]
pub struct MemoryEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl MemoryEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now, if given.
    ///
    /// A deadline past the clock's range means the entry never expires.
    pub fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let now = Instant::now();

        Self {
            value,
            expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its deadline, so a zero TTL is expired immediately.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Instant::now() >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the deadline has passed
    /// - `Some(remaining)` if the entry has a TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}
