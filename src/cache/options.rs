//! Entry Options Module
//!
//! Per-entry metadata passed through to the backend on every write.

use std::time::Duration;

// == Entry Options ==
/// Options attached to a cache entry at write time.
///
/// An unset expiration leaves the lifetime to the backend's own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryOptions {
    /// Expire the entry this long after it is written
    pub absolute_expiration_relative_to_now: Option<Duration>,
}

impl EntryOptions {
    // == Constructors ==
    /// Options with no expiration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that expire the entry `ttl` after it is written.
    pub fn expires_in(ttl: Duration) -> Self {
        Self {
            absolute_expiration_relative_to_now: Some(ttl),
        }
    }

    // == Builder ==
    /// Sets the expiration relative to the time of the write.
    pub fn with_absolute_expiration_relative_to_now(mut self, ttl: Duration) -> Self {
        self.absolute_expiration_relative_to_now = Some(ttl);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_expiration() {
        assert_eq!(EntryOptions::new().absolute_expiration_relative_to_now, None);
        assert_eq!(EntryOptions::new(), EntryOptions::default());
    }

    #[test]
    fn test_expires_in_matches_builder() {
        let ttl = Duration::from_secs(90);
        assert_eq!(
            EntryOptions::expires_in(ttl),
            EntryOptions::new().with_absolute_expiration_relative_to_now(ttl)
        );
    }
}
