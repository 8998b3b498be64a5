//! Bounded insertion-order cache.
//!
//! Hex parses and style compilations repeat heavily in render loops, so
//! their results are kept in small fixed-capacity caches. Eviction is
//! strictly FIFO on insertion order: reads never promote an entry, which
//! keeps `get` cheap under a shared lock. This is not an LRU.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

#[derive(Debug)]
pub(crate) struct FifoCache<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> FifoCache<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::with_capacity(capacity.min(64)),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Insert, evicting the oldest-inserted entry when full. Re-inserting
    /// an existing key replaces the value without touching its age.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        if self.map.contains_key(&key) {
            self.map.insert(key, value);
            return;
        }
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.map.insert(key, value);
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_insertion_first() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reads_do_not_promote() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        // A hit on "a" must not save it from FIFO eviction.
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.insert("c", 3);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn reinsert_replaces_value_in_place() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.len(), 2);
        // "a" kept its original age, so it is still evicted first.
        cache.insert("c", 3);
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let mut cache = FifoCache::new(0);
        cache.insert(1u8, "x");
        assert_eq!(cache.get(&1), Some(&"x"));
        cache.insert(2u8, "y");
        assert_eq!(cache.len(), 1);
    }
}
