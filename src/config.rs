//! Configuration Module
//!
//! Handles loading the demo harness configuration from environment
//! variables.

use std::env;

/// Demo harness configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Unparseable values fall back to the default; a zero capacity
/// is passed through and rejected at cache construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Number of concurrent workers hammering the cache
    pub workers: usize,
    /// Total number of insert-then-lookup iterations across all workers
    pub operations: u64,
    /// Upper bound of the random key space
    pub key_space: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `WORKER_COUNT` - Concurrent workers (default: 8)
    /// - `OPERATION_COUNT` - Total iterations (default: 10000)
    /// - `KEY_SPACE` - Random key space bound (default: 2000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            workers: env::var("WORKER_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            operations: env::var("OPERATION_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            key_space: env::var("KEY_SPACE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            workers: 8,
            operations: 10_000,
            key_space: 2000,
        }
    }
}
