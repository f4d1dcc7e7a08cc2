//! LRU Tracker Module
//!
//! Access ordering of cache keys for capacity eviction.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks cache keys from most to least recently used.
///
/// Front = most recently used, back = eviction candidate.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(existing) = self.order.remove(pos) {
                self.order.push_front(existing);
            }
        } else {
            self.order.push_front(key.to_string());
        }
    }

    // == Remove ==
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Pops the least recently used key, None when empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: &str = "GET host/badge?owner=a&repo=b accept=";
    const JSON: &str = "GET host/?owner=a&repo=b accept=";
    const LATEST: &str = "GET host/badge/latest?owner=a&repo=b accept=";

    #[test]
    fn test_lru_new() {
        let mut lru = LruTracker::new();
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_evicts_in_insertion_order() {
        let mut lru = LruTracker::new();
        lru.touch(BADGE);
        lru.touch(JSON);
        lru.touch(LATEST);

        assert_eq!(lru.evict_oldest().as_deref(), Some(BADGE));
        assert_eq!(lru.evict_oldest().as_deref(), Some(JSON));
        assert_eq!(lru.evict_oldest().as_deref(), Some(LATEST));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_touch_refreshes_position() {
        let mut lru = LruTracker::new();
        lru.touch(BADGE);
        lru.touch(JSON);
        lru.touch(LATEST);
        lru.touch(BADGE);

        assert_eq!(lru.evict_oldest().as_deref(), Some(JSON));
        assert_eq!(lru.evict_oldest().as_deref(), Some(LATEST));
        assert_eq!(lru.evict_oldest().as_deref(), Some(BADGE));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_repeated_touch_keeps_single_entry() {
        let mut lru = LruTracker::new();
        lru.touch(JSON);
        lru.touch(JSON);

        assert_eq!(lru.evict_oldest().as_deref(), Some(JSON));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_remove() {
        let mut lru = LruTracker::new();
        lru.touch(BADGE);
        lru.touch(JSON);

        lru.remove(BADGE);
        lru.remove("missing");

        assert_eq!(lru.evict_oldest().as_deref(), Some(JSON));
        assert_eq!(lru.evict_oldest(), None);
    }
}
