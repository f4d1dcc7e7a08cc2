//! Cache Statistics Module
//!
//! Hit, miss and eviction counters for the response cache.

use crate::models::StatsResponse;

// == Cache Stats ==
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
    /// Current number of cached responses
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        StatsResponse::new(stats.hits, stats.misses, stats.evictions, stats.total_entries)
    }
}
