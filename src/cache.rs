//! Query Cache
//!
//! Listing responses keyed by their query. Any successful mutation clears
//! the whole cache and bumps the generation, so the next fetch goes to the
//! server and observes the change.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, V>,
    generation: u32,
}

impl<K: Eq + Hash, V: Clone> QueryCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    /// Store a response fetched during `generation`; stale ones are dropped
    pub fn insert(&mut self, key: K, value: V, generation: u32) -> bool {
        if generation != self.generation {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentQuery;

    fn query(page: u32) -> ContentQuery {
        ContentQuery { page, limit: 12, tag_id: Some(3) }
    }

    #[test]
    fn test_hit_for_identical_key() {
        let mut cache = QueryCache::new();
        assert!(cache.insert(query(1), "page one", cache.generation()));
        assert_eq!(cache.get(&query(1)), Some("page one"));
        assert_eq!(cache.get(&query(2)), None);
        assert_eq!(cache.get(&ContentQuery { tag_id: None, ..query(1) }), None);
    }

    #[test]
    fn test_invalidate_clears_and_advances_generation() {
        let mut cache = QueryCache::new();
        let before = cache.generation();
        cache.insert(query(1), 1, before);
        cache.invalidate();
        assert!(cache.is_empty());
        assert_eq!(cache.generation(), before + 1);
    }

    #[test]
    fn test_response_from_before_invalidation_is_dropped() {
        let mut cache = QueryCache::new();
        let started_at = cache.generation();
        cache.invalidate();
        assert!(!cache.insert(query(1), 1, started_at));
        assert_eq!(cache.len(), 0);
    }
}
