//! Response Cache Store
//!
//! Keyed response storage combining LRU tracking with per-entry expiry.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{
    CacheEntry, CacheError, CacheStats, CachedResponse, LruTracker, MAX_BODY_SIZE, MAX_KEY_LENGTH,
};

// == Response Cache ==
/// In-memory response cache bounded by entry count.
#[derive(Debug)]
pub struct ResponseCache {
    /// Stored responses by request key
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl ResponseCache {
    // == Constructor ==
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
        }
    }

    // == Put ==
    /// Stores a response under `key`.
    ///
    /// The lifetime comes from the response's own `Cache-Control` header.
    /// Non-success responses and responses with no positive lifetime are
    /// rejected. At capacity the least recently used entry is evicted.
    pub fn put(&mut self, key: String, response: CachedResponse) -> Result<(), CacheError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::KeyTooLong(MAX_KEY_LENGTH));
        }
        if response.body.len() > MAX_BODY_SIZE {
            return Err(CacheError::BodyTooLarge(MAX_BODY_SIZE));
        }
        if !response.status.is_success() {
            return Err(CacheError::NotCacheable(format!(
                "status {}",
                response.status.as_u16()
            )));
        }
        let ttl = match response.freshness_lifetime() {
            Some(ttl) if ttl > 0 => ttl,
            _ => {
                return Err(CacheError::NotCacheable(
                    "no positive shared-cache lifetime".to_string(),
                ))
            }
        };

        let is_overwrite = self.entries.contains_key(&key);
        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                debug!("Evicted cached response {}", evicted_key);
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(response, ttl));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns a fresh cached response for `key`.
    ///
    /// Expired entries are dropped and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<CachedResponse> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let response = entry.response.clone();
                debug!("Cache hit for {} ({}s remaining)", key, entry.ttl_remaining());
                self.stats.record_hit();
                self.lru.touch(key);
                return Some(response);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
