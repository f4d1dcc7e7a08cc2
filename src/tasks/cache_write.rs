//! Detached cache writes.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheError, CachedResponse, ResponseCache};

/// Stores `response` under `key` on a background task.
///
/// The caller never awaits the handle; a failed write is only logged.
pub fn spawn_cache_write(
    cache: Arc<RwLock<ResponseCache>>,
    key: String,
    response: CachedResponse,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = cache.write().await.put(key.clone(), response);
        match result {
            Ok(()) => debug!("Cached response for {}", key),
            Err(CacheError::NotCacheable(reason)) => {
                debug!("Skipped caching {}: {}", key, reason)
            }
            Err(e) => warn!("Cache write for {} failed: {}", key, e),
        }
    })
}
