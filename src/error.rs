//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! A lookup miss is not an error; `MemoryCache::try_get` reports it as
//! `None`. The only failure mode the cache itself can produce is a bad
//! construction argument.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache was constructed with an unusable capacity
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
