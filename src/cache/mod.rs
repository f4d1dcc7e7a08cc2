//! Cache Module
//!
//! In-memory response cache with TTL expiration and LRU eviction.

mod entry;
mod lru;
mod response;
mod stats;
mod store;


use thiserror::Error;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use response::{cache_key, CachedResponse};
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Maximum allowed cache key length in bytes
pub const MAX_KEY_LENGTH: usize = 4096;

/// Maximum cached body size in bytes
pub const MAX_BODY_SIZE: usize = 1024 * 1024; // 1 MB

// == Cache Error ==
/// Reasons a response could not be stored.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache key exceeds maximum length of {0} bytes")]
    KeyTooLong(usize),

    #[error("Response body exceeds maximum size of {0} bytes")]
    BodyTooLarge(usize),

    #[error("Response is not cacheable: {0}")]
    NotCacheable(String),
}
