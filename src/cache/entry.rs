//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

/// Upper bound applied to every TTL (about 100 years) so that computing an
/// absolute expiry can never overflow the monotonic clock.
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A stored value together with its absolute expiration instant.
///
/// Entries live only inside the cache map and are never handed out across a
/// lock release; callers see the value, not the entry.
#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    /// The stored value
    value: V,
    /// Monotonic instant after which the entry is expired
    expires_at: Instant,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    ///
    /// The expiry is computed once, here, against the monotonic clock. A zero
    /// TTL produces an entry that is already expired for every later check.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time to live, measured from this call
    pub(crate) fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl.min(MAX_TTL),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// Boundary condition: the comparison is strictly greater-than, so an
    /// entry is still live at exactly its expiration instant and expired one
    /// nanosecond after. `now` is sampled by the caller, which lets a single
    /// sweep or lookup pass judge every entry against one time base.
    ///
    /// # Returns
    /// - `true` if `now` is past the expiration instant
    /// - `false` otherwise
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    /// Returns a reference to the stored value.
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning the stored value.
    pub(crate) fn into_value(self) -> V {
        self.value
    }

    /// Returns the absolute expiration instant.
    pub(crate) fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_with_ttl() {
        let before = Instant::now();
        let entry = Entry::new("test_value", Duration::from_secs(60));

        assert_eq!(*entry.value(), "test_value");
        assert!(entry.expires_at() >= before + Duration::from_secs(60));
        assert!(!entry.is_expired(Instant::now()));
    }

    #[test]
    fn test_entry_zero_ttl_is_expired_after_creation() {
        let entry = Entry::new("test_value", Duration::ZERO);

        // Any instant after creation is past the expiry.
        assert!(entry.is_expired(Instant::now() + Duration::from_nanos(1)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = Entry {
            value: "test",
            expires_at: now,
        };

        // Live at exactly the expiration instant, expired just past it.
        assert!(
            !entry.is_expired(now),
            "Entry should still be live at its expiration instant"
        );
        assert!(
            entry.is_expired(now + Duration::from_nanos(1)),
            "Entry should be expired past its expiration instant"
        );
    }

    #[test]
    fn test_caller_sampled_now_is_consistent() {
        let entry = Entry::new("test_value", Duration::from_millis(10));
        let now = Instant::now();

        // Repeated checks against the same sampled instant agree.
        assert_eq!(entry.is_expired(now), entry.is_expired(now));
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let entry = Entry::new("test_value", Duration::from_secs(u64::MAX));

        assert!(!entry.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn test_into_value_returns_stored_value() {
        let entry = Entry::new(vec![1, 2, 3], Duration::from_secs(1));

        assert_eq!(entry.into_value(), vec![1, 2, 3]);
    }
}
