//! LRU Tracker Module
//!
//! Strict access-order bookkeeping behind the eviction policy.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks recency order for eviction candidate selection.
///
/// Keys sit in a VecDeque with the most recently touched key at the front;
/// the back is always the next eviction candidate. Order is strict insertion
/// and access order with no size or value weighting.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, inserting it if unknown.
    ///
    /// An existing occurrence is removed first; recency is determined purely
    /// by position, so a touched key must physically move to the front.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Drops a key from the order. Unknown keys are a no-op.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key, if any.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// The least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    // == Clear ==
    /// Forgets every tracked key.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_empty() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_first_touched_key_is_oldest() {
        let mut lru = LruTracker::new();

        lru.touch("users:1");
        lru.touch("users:2");
        lru.touch("users:3");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&"users:1".to_string()));
    }

    #[test]
    fn test_touch_moves_key_to_front() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");

        // Re-touching the oldest key promotes it; "b" becomes the candidate.
        lru.touch("a");
        assert_eq!(lru.peek_oldest(), Some(&"b".to_string()));

        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
    }

    #[test]
    fn test_touch_is_idempotent_on_membership() {
        let mut lru = LruTracker::new();

        lru.touch("k");
        lru.touch("k");
        lru.touch("k");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_oldest(), Some("k".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_evict_oldest_on_empty_tracker() {
        let mut lru = LruTracker::new();
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_evictions_follow_access_order() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("b");

        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_remove_is_position_precise() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");

        lru.remove("b");

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.remove("missing");

        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.evict_oldest(), None);
    }
}
