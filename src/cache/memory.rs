//! Memory Cache Module
//!
//! The public, thread-safe cache facade. One mutex guards the entry map
//! and the recency order jointly, so no caller ever observes the two
//! disagreeing about membership.

use std::hash::Hash;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, StatsRecorder, WriteOutcome};
use crate::error::Result;

// == Memory Cache ==
/// Fixed-capacity, thread-safe key/value cache with LRU eviction.
///
/// Every operation takes the single internal lock for its full duration,
/// so calls are linearizable: each appears to take effect atomically in
/// some total order shared by all callers. A lookup is a write from the
/// cache's point of view (a hit renews the key's recency), which is why
/// there is no separate read path.
///
/// Values are handed back by clone. Callers that want shared-handle
/// semantics should store an `Arc<T>` (or `Arc<Mutex<T>>` for external
/// mutation); mutating a previously-returned handle is visible through
/// later lookups but does not renew the key's recency. Only
/// `add_or_update` and `try_get` do that.
///
/// Share the cache across threads by wrapping it in an `Arc`.
#[derive(Debug)]
pub struct MemoryCache<K, V> {
    /// Store and recency order, guarded jointly
    store: Mutex<CacheStore<K, V>>,
    /// Event counters, recorded while the lock is held
    stats: StatsRecorder,
}

impl<K: Eq + Hash + Clone, V: Clone> MemoryCache<K, V> {
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    ///
    /// Fails with `CacheError::InvalidCapacity` when `capacity` is zero.
    /// The capacity is immutable for the cache's lifetime.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: Mutex::new(CacheStore::new(capacity)?),
            stats: StatsRecorder::new(),
        })
    }

    // == Add Or Update ==
    /// Stores `value` under `key`, inserting or overwriting as needed.
    ///
    /// If the key is new and the cache is full, the least recently used
    /// entry is evicted to make room; overwriting an existing key never
    /// evicts. The key becomes the most recently used entry either way.
    /// Capacity enforcement is silent; no key/value combination is an
    /// error.
    pub fn add_or_update(&self, key: K, value: V) {
        let mut store = self.store.lock();
        match store.set(key, value) {
            WriteOutcome::Inserted { evicted } => {
                self.stats.record_insert();
                if evicted.is_some() {
                    self.stats.record_eviction();
                    debug!(size = store.len(), "evicted least recently used entry");
                }
            }
            WriteOutcome::Updated => self.stats.record_update(),
        }
    }

    // == Try Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// On a hit, returns a clone of the value and moves the key to the
    /// most recently used position. On a miss, returns `None` and leaves
    /// the recency order untouched.
    pub fn try_get(&self, key: &K) -> Option<V> {
        let mut store = self.store.lock();
        match store.get(key) {
            Some(value) => {
                self.stats.record_refresh();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Keys By Age ==
    /// Returns the cached keys ordered oldest to newest.
    ///
    /// The first key is the next eviction candidate.
    pub fn keys_by_age(&self) -> Vec<K> {
        self.store.lock().keys_by_age()
    }

    // == Capacity ==
    /// Returns the fixed capacity configured at construction.
    pub fn capacity(&self) -> usize {
        self.store.lock().capacity()
    }

    // == Length ==
    /// Returns the current number of cached entries.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the event counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}
