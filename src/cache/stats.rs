//! Cache Statistics Module
//!
//! Tracks cache event counters: inserts, updates, evictions, misses
//! and refreshes.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// A point-in-time snapshot of the cache event counters.
///
/// Each counter is monotonically increasing and bumped exactly once per
/// corresponding event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of new keys written
    pub inserts: u64,
    /// Number of existing keys overwritten in place
    pub updates: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// Number of failed lookups (key not present)
    pub misses: u64,
    /// Number of successful lookups (each also renews recency)
    pub refreshes: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the lookup hit rate.
    ///
    /// Returns refreshes / (refreshes + misses), or 0.0 if no lookups
    /// have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.refreshes + self.misses;
        if total == 0 {
            0.0
        } else {
            self.refreshes as f64 / total as f64
        }
    }

    // == Writes ==
    /// Total number of write operations (inserts + updates).
    pub fn writes(&self) -> u64 {
        self.inserts + self.updates
    }
}

// == Stats Recorder ==
/// Atomic event counters shared by all callers of a cache.
///
/// The recorder sits beside the cache engine rather than inside it; the
/// cache facade bumps the counters from the outcome of each operation.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    inserts: AtomicU64,
    updates: AtomicU64,
    evictions: AtomicU64,
    misses: AtomicU64,
    refreshes: AtomicU64,
}

impl StatsRecorder {
    // == Constructor ==
    /// Creates a new recorder with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Insert ==
    /// Increments the insert counter.
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Update ==
    /// Increments the update counter.
    pub fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Refresh ==
    /// Increments the refresh counter.
    pub fn record_refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a snapshot of the current counter values.
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            refreshes: self.refreshes.load(Ordering::Relaxed),
        }
    }
}
