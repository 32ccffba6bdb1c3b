//! Integration Tests for the Cache
//!
//! Exercises the public contract end to end: construction, eviction and
//! refresh ordering, counter identities, and consistency under concurrent
//! access from threads and async tasks.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use memlru::{CacheError, MemoryCache};

// == Construction ==

#[test]
fn test_zero_capacity_is_a_construction_error() {
    let result: Result<MemoryCache<u64, u64>, CacheError> = MemoryCache::new(0);
    assert!(matches!(result, Err(CacheError::InvalidCapacity(_))));
}

#[test]
fn test_positive_capacities_are_accepted() {
    for capacity in [1, 7, 1000] {
        let cache: MemoryCache<u64, u64> = MemoryCache::new(capacity).unwrap();
        assert_eq!(cache.capacity(), capacity);
        assert!(cache.is_empty());
    }
}

// == Eviction and ordering ==

#[test]
fn test_capacity_never_exceeded() {
    let cache = MemoryCache::new(10).unwrap();

    for i in 0..100u64 {
        cache.add_or_update(i, i);
        assert!(cache.len() <= 10);
    }
    assert_eq!(cache.len(), 10);
}

#[test]
fn test_sequential_fill_keeps_last_capacity_keys() {
    let cache = MemoryCache::new(5).unwrap();

    for i in 0..10u64 {
        cache.add_or_update(i, i * 10);
    }

    // Only the last five distinct keys survive, in insertion order
    assert_eq!(cache.keys_by_age(), vec![5, 6, 7, 8, 9]);
    for evicted in 0..5u64 {
        assert_eq!(cache.try_get(&evicted), None);
    }
    for kept in 5..10u64 {
        assert_eq!(cache.try_get(&kept), Some(kept * 10));
    }
}

#[test]
fn test_miss_preserves_recency_order() {
    let cache = MemoryCache::new(3).unwrap();

    cache.add_or_update("a", 1);
    cache.add_or_update("b", 2);

    let before = cache.keys_by_age();
    assert_eq!(cache.try_get(&"missing"), None);
    assert_eq!(cache.keys_by_age(), before);
}

// A key that is continuously looked up outlives thousands of inserts.
#[test]
fn test_continuous_refresh_keeps_key_youngest() {
    let cache = MemoryCache::new(50).unwrap();
    let key_of_interest = 1u64;

    for i in 0..10_000u64 {
        cache.add_or_update(i, i);
        let _ = cache.try_get(&key_of_interest);
    }

    let keys = cache.keys_by_age();
    assert_eq!(keys.last(), Some(&key_of_interest));
    assert_eq!(cache.try_get(&key_of_interest), Some(1));
}

// == Counter identities ==

#[test]
fn test_counter_identities_at_quiescence() {
    let cache = MemoryCache::new(8).unwrap();

    for i in 0..100u64 {
        cache.add_or_update(i % 20, i);
        let _ = cache.try_get(&(i % 3));
    }

    let stats = cache.stats();
    assert_eq!(stats.inserts + stats.updates, 100);
    assert_eq!(stats.refreshes + stats.misses, 100);
    assert_eq!(stats.inserts - stats.evictions, cache.len() as u64);
}

// == Concurrency ==

#[test]
fn test_threaded_hammer_leaves_cache_consistent() {
    const THREADS: u64 = 8;
    const OPS: u64 = 1000;
    const CAPACITY: usize = 32;

    let cache: Arc<MemoryCache<u64, u64>> = Arc::new(MemoryCache::new(CAPACITY).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS {
                    let key = (t * 31 + i) % 100;
                    cache.add_or_update(key, t);
                    let _ = cache.try_get(&key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = cache.stats();
    let keys = cache.keys_by_age();

    // Size bounded and order/map in agreement
    assert!(cache.len() <= CAPACITY);
    assert_eq!(keys.len(), cache.len());
    let distinct: HashSet<u64> = keys.iter().copied().collect();
    assert_eq!(distinct.len(), keys.len(), "duplicate keys in recency order");

    // Every operation was counted exactly once
    assert_eq!(stats.inserts + stats.updates, THREADS * OPS);
    assert_eq!(stats.refreshes + stats.misses, THREADS * OPS);
    assert_eq!(stats.inserts - stats.evictions, cache.len() as u64);

    // Every key the order lists is present in the store
    for key in keys {
        assert!(cache.try_get(&key).is_some());
    }
}

#[test]
fn test_async_tasks_share_cache() {
    tokio_test::block_on(async {
        let cache: Arc<MemoryCache<u64, String>> = Arc::new(MemoryCache::new(16).unwrap());

        let mut handles = Vec::new();
        for t in 0..4u64 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                for i in 0..50u64 {
                    let key = t * 100 + (i % 10);
                    cache.add_or_update(key, format!("worker-{t}-{i}"));
                    let _ = cache.try_get(&key);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(cache.len() <= 16);
        assert_eq!(cache.keys_by_age().len(), cache.len());
        assert_eq!(cache.stats().inserts + cache.stats().updates, 200);
    });
}
