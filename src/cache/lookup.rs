//! Lookup Outcome Module
//!
//! Defines the three-way result of expiry-aware reads (`get` and `pop`).

// == Lookup Outcome ==
/// Outcome of an expiry-aware read.
///
/// A read distinguishes a live entry from an expired one and from an absent
/// key. Expired reads surface the stored value rather than scrubbing it:
///
/// - [`Lookup::Hit`] carries the live value; this is the only found case.
/// - [`Lookup::Expired`] carries the value that was stored under the key at
///   the moment the read deleted it. **This is not a cache hit.** The payload
///   exists for callers that want the last-known value for logging or
///   salvage; treating it as a valid read reintroduces exactly the staleness
///   the TTL is there to prevent. Check [`found`](Lookup::found) (or match on
///   `Hit`) before trusting a value.
/// - [`Lookup::Miss`] means no entry existed under the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// The key held a live entry; its value (cloned by `get`, moved by `pop`).
    Hit(V),
    /// The key held an expired entry, now deleted; its stale value.
    Expired(V),
    /// The key held no entry.
    Miss,
}

impl<V> Lookup<V> {
    /// Returns `true` only for a live hit.
    ///
    /// Expired reads return `false` even though they carry a value.
    pub fn found(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    /// Consumes the outcome, returning the value for a live hit and `None`
    /// otherwise.
    ///
    /// This is the safe default accessor: stale values are dropped.
    pub fn into_value(self) -> Option<V> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Expired(_) | Lookup::Miss => None,
        }
    }

    /// Consumes the outcome, returning whatever value was stored under the
    /// key, live or expired.
    ///
    /// Use this only where a stale value is knowingly acceptable.
    pub fn into_stored(self) -> Option<V> {
        match self {
            Lookup::Hit(value) | Lookup::Expired(value) => Some(value),
            Lookup::Miss => None,
        }
    }
}

impl<V> From<Lookup<V>> for Option<V> {
    /// Collapses the outcome to the live value, dropping stale ones.
    fn from(lookup: Lookup<V>) -> Self {
        lookup.into_value()
    }
}
