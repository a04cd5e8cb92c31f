//! Cache Store Module
//!
//! Main cache engine: a map of TTL entries behind a single reader/writer
//! lock, shared between caller operations and the background sweeper.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::watch;

use crate::cache::{Entry, Lookup};
use crate::config::CacheConfig;
use crate::tasks::sweeper::spawn_sweeper;

// == Shared State ==
/// State shared by every handle of one cache and by its sweeper.
///
/// The map is the only place entries live; every operation that can delete
/// takes the write lock, so no reader ever observes a half-applied change.
#[derive(Debug)]
pub(crate) struct Shared<K, V> {
    /// Key-value storage guarded by the cache-wide lock
    pub(crate) items: RwLock<HashMap<K, Entry<V>>>,
    /// Stop signal for the background sweeper
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl<K, V> Shared<K, V>
where
    K: Eq + Hash,
{
    /// Removes every expired entry in one exclusive pass.
    ///
    /// All entries are judged against a single `now` sample taken at the
    /// start of the pass, so the whole pass shares one time base.
    ///
    /// # Returns
    /// The number of entries removed.
    pub(crate) fn purge_expired(&self) -> usize {
        let mut items = self.items.write().expect("cache lock poisoned");
        let now = Instant::now();
        let before = items.len();
        items.retain(|_, entry| !entry.is_expired(now));
        before - items.len()
    }
}

impl<K, V> Drop for Shared<K, V> {
    fn drop(&mut self) {
        // Last handle gone: tell the sweeper to stop. Its weak reference
        // also fails to upgrade from here on, so either path ends the task.
        let _ = self.shutdown_tx.send(true);
    }
}

// == Cache ==
/// A thread-safe in-memory key-value cache with per-entry TTL.
///
/// Every entry expires: `set` computes an absolute expiration instant from
/// the supplied TTL, reads never return entries past that instant, and
/// expired entries are reclaimed two ways:
///
/// - **lazily**, when `get`, `pop`, or `contains_key` touches an expired
///   entry it deletes it on the spot;
/// - **actively**, by a background sweeper task (one per cache, started at
///   construction) that purges the whole map on a fixed interval.
///
/// The handle is cheap to clone; clones share one store and one sweeper.
/// All operations are synchronous and block only on the internal lock,
/// never on I/O. The sweeper stops when [`shutdown`](Cache::shutdown) is
/// called or when the last handle is dropped.
///
/// `K` needs `Eq + Hash` for the map and `Send + Sync + 'static` (with `V`)
/// because the sweeper task can touch the map from another thread. `V: Clone`
/// is required only by `get`; `pop` moves the value out without cloning.
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: Arc<Shared<K, V>>,
}

// Derived Clone would demand K: Clone + V: Clone; only the Arc is cloned.
impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an empty cache and starts its background sweeper with the
    /// default sweep interval (5 seconds).
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime; the sweeper is spawned
    /// here.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache and starts its background sweeper.
    ///
    /// The sweeper holds only a weak reference to the cache and a stop
    /// signal, so it can never keep the cache alive nor outlive it.
    ///
    /// # Arguments
    /// * `config` - Sweep cadence, see [`CacheConfig`]
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime, or when
    /// `config.sweep_interval` is zero.
    pub fn with_config(config: CacheConfig) -> Self {
        if tokio::runtime::Handle::try_current().is_err() {
            panic!(
                "expiremap::Cache must be constructed inside a Tokio runtime; \
                 the background sweeper is spawned at construction"
            );
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let inner = Arc::new(Shared {
            items: RwLock::new(HashMap::new()),
            shutdown_tx,
        });

        spawn_sweeper(Arc::downgrade(&inner), config.sweep_interval, shutdown_rx);

        Self { inner }
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl` from now.
    ///
    /// Unconditional upsert: an existing entry is replaced and its remaining
    /// TTL discarded, whether it was live or expired. A zero TTL is accepted
    /// and yields an entry that is already expired for every subsequent
    /// read.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl` - Time to live, measured from this call
    pub fn set(&self, key: K, value: V, ttl: Duration) {
        let mut items = self.inner.items.write().expect("cache lock poisoned");
        items.insert(key, Entry::new(value, ttl));
    }

    // == Get ==
    /// Looks up `key`, expiring lazily.
    ///
    /// The whole operation runs in one exclusive critical section: the
    /// expiry check and the deletion of an expired entry happen under the
    /// same lock acquisition, so no concurrent call can slip between them.
    ///
    /// # Returns
    /// - [`Lookup::Hit`] with a clone of the value for a live entry
    /// - [`Lookup::Expired`] with the stale value for an expired entry,
    ///   which is deleted as a side effect; this is not a hit, see the
    ///   [`Lookup`] docs before using the payload
    /// - [`Lookup::Miss`] when the key is absent
    pub fn get(&self, key: &K) -> Lookup<V>
    where
        V: Clone,
    {
        let mut items = self.inner.items.write().expect("cache lock poisoned");
        let now = Instant::now();

        if let Some(entry) = items.get(key) {
            if entry.is_expired(now) {
                // Still under the same write lock, so the entry we just
                // observed cannot have moved.
                let entry = items
                    .remove(key)
                    .expect("expired entry present under the write lock");
                return Lookup::Expired(entry.into_value());
            }
            return Lookup::Hit(entry.value().clone());
        }

        Lookup::Miss
    }

    // == Remove ==
    /// Deletes the entry under `key`, if any.
    ///
    /// Unconditional and silent: removing an absent key is a no-op, and the
    /// caller cannot tell the two cases apart. Use [`pop`](Cache::pop) when
    /// the removed value, or the fact of removal, matters.
    pub fn remove(&self, key: &K) {
        let mut items = self.inner.items.write().expect("cache lock poisoned");
        items.remove(key);
    }

    // == Pop ==
    /// Removes the entry under `key` and returns its value.
    ///
    /// Lookup and deletion happen under one exclusive lock acquisition, so
    /// of any number of concurrent `pop`s for the same key, exactly one
    /// observes the entry. The value is moved out, not cloned.
    ///
    /// # Returns
    /// - [`Lookup::Hit`] with the value if the entry was live
    /// - [`Lookup::Expired`] with the stale value if it had expired; the
    ///   entry is deleted either way
    /// - [`Lookup::Miss`] when the key is absent
    pub fn pop(&self, key: &K) -> Lookup<V> {
        let mut items = self.inner.items.write().expect("cache lock poisoned");
        let now = Instant::now();

        match items.remove(key) {
            None => Lookup::Miss,
            Some(entry) if entry.is_expired(now) => Lookup::Expired(entry.into_value()),
            Some(entry) => Lookup::Hit(entry.into_value()),
        }
    }

    // == Purge Expired ==
    /// Removes all expired entries now, without waiting for the sweeper.
    ///
    /// This is the same pass the background sweeper runs on its interval.
    ///
    /// # Returns
    /// The number of entries removed.
    pub fn purge_expired(&self) -> usize {
        self.inner.purge_expired()
    }

    // == Length ==
    /// Returns the number of entries physically present in the map.
    ///
    /// Expired entries that no read or sweep has reclaimed yet are counted:
    /// this is a storage probe, not a liveness count. Use
    /// [`contains_key`](Cache::contains_key) to ask about a live entry.
    pub fn len(&self) -> usize {
        self.inner.items.read().expect("cache lock poisoned").len()
    }

    // == Is Empty ==
    /// Returns `true` if the map holds no entries, expired or not.
    pub fn is_empty(&self) -> bool {
        self.inner
            .items
            .read()
            .expect("cache lock poisoned")
            .is_empty()
    }

    // == Contains Key ==
    /// Returns `true` if `key` holds a live entry.
    ///
    /// Expiry-aware like [`get`](Cache::get): an expired entry is deleted
    /// and reported as absent. Requires no `V: Clone` since no value is
    /// returned.
    pub fn contains_key(&self, key: &K) -> bool {
        let mut items = self.inner.items.write().expect("cache lock poisoned");
        let now = Instant::now();

        if let Some(entry) = items.get(key) {
            if !entry.is_expired(now) {
                return true;
            }
            items.remove(key);
        }
        false
    }

    // == Expires In ==
    /// Returns the remaining TTL of the live entry under `key`.
    ///
    /// Read-only probe: takes the shared lock and deletes nothing, so it can
    /// run alongside other readers.
    ///
    /// # Returns
    /// - `Some(remaining)` for a live entry
    /// - `None` when the key is absent or its entry has expired
    pub fn expires_in(&self, key: &K) -> Option<Duration> {
        let items = self.inner.items.read().expect("cache lock poisoned");
        let now = Instant::now();
        let entry = items.get(key)?;

        if entry.is_expired(now) {
            return None;
        }
        Some(entry.expires_at().saturating_duration_since(now))
    }

    // == Clear ==
    /// Removes every entry, live or expired.
    pub fn clear(&self) {
        let mut items = self.inner.items.write().expect("cache lock poisoned");
        items.clear();
    }

    // == Shutdown ==
    /// Stops the background sweeper.
    ///
    /// Idempotent. The cache stays fully usable afterwards; expired entries
    /// are then reclaimed only lazily, by the reads that touch them. The
    /// sweeper also stops on its own when the last handle is dropped.
    pub fn shutdown(&self) {
        let _ = self.inner.shutdown_tx.send(true);
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
