use linked_hash_set::LinkedHashSet;
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// LruPolicy evicts the least recently used key.
///
/// Keys are kept in a linked hash set ordered from least to most recently used. Inserting or
/// touching a key moves it to the most recently used end in O(1).
///
/// Example:
/// ```
/// use polycache::{Cache, LruPolicy};
///
/// let cache = Cache::<&str, i32, LruPolicy<&str>>::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.contains(&"a");
/// cache.insert("c", 3);
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct LruPolicy<K: Eq + Hash> {
    recency: LinkedHashSet<K>,
}

impl<K: Eq + Hash> LruPolicy<K> {
    /// Create an empty LruPolicy.
    pub fn new() -> Self {
        LruPolicy {
            recency: LinkedHashSet::new(),
        }
    }
}

impl<K: Eq + Hash> Default for LruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> EvictionPolicy<K> for LruPolicy<K> {
    fn insert(&mut self, key: K) {
        let inserted = self.recency.insert_if_absent(key);
        assert!(inserted, "LRU policy asked to insert a key it already tracks");
    }

    fn touch(&mut self, key: &K) {
        let refreshed = self.recency.refresh(key);
        assert!(refreshed, "LRU policy asked to touch a key it does not track");
    }

    fn erase(&mut self, key: &K) {
        let removed = self.recency.remove(key);
        assert!(removed, "LRU policy asked to erase a key it does not track");
    }

    /// The key touched least recently.
    fn replace_candidate(&self) -> Option<&K> {
        self.recency.front()
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn len(&self) -> usize {
        self.recency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_policy() {
        let mut policy = LruPolicy::new();
        policy.insert(1);
        policy.insert(2);
        policy.insert(3);
        assert_eq!(policy.replace_candidate(), Some(&1));
        policy.touch(&1);
        assert_eq!(policy.replace_candidate(), Some(&2));
        policy.touch(&2);
        assert_eq!(policy.replace_candidate(), Some(&3));
        policy.erase(&3);
        assert_eq!(policy.replace_candidate(), Some(&1));
    }

    #[test]
    #[should_panic(expected = "does not track")]
    fn test_lru_policy_touch_untracked() {
        let mut policy = LruPolicy::new();
        policy.insert(1);
        policy.touch(&2);
    }
}
