use linked_hash_set::LinkedHashSet;
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// MruPolicy evicts the most recently used key.
///
/// This is the opposite of [`LruPolicy`](crate::LruPolicy) and suits cyclic access patterns where
/// the key just used is the one least likely to be needed again soon.
///
/// Example:
/// ```
/// use polycache::{Cache, MruPolicy};
///
/// let cache = Cache::<&str, i32, MruPolicy<&str>>::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.contains(&"a");
/// cache.insert("c", 3);
///
/// assert!(!cache.contains(&"a"));
/// assert!(cache.contains(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct MruPolicy<K: Eq + Hash> {
    recency: LinkedHashSet<K>,
}

impl<K: Eq + Hash> MruPolicy<K> {
    /// Create an empty MruPolicy.
    pub fn new() -> Self {
        MruPolicy {
            recency: LinkedHashSet::new(),
        }
    }
}

impl<K: Eq + Hash> Default for MruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> EvictionPolicy<K> for MruPolicy<K> {
    fn insert(&mut self, key: K) {
        let inserted = self.recency.insert_if_absent(key);
        assert!(inserted, "MRU policy asked to insert a key it already tracks");
    }

    fn touch(&mut self, key: &K) {
        let refreshed = self.recency.refresh(key);
        assert!(refreshed, "MRU policy asked to touch a key it does not track");
    }

    fn erase(&mut self, key: &K) {
        let removed = self.recency.remove(key);
        assert!(removed, "MRU policy asked to erase a key it does not track");
    }

    /// The key touched most recently.
    fn replace_candidate(&self) -> Option<&K> {
        self.recency.back()
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
    fn test_mru_policy() {
        let mut policy = MruPolicy::new();
        policy.insert(1);
        policy.insert(2);
        policy.insert(3);
        assert_eq!(policy.replace_candidate(), Some(&3));
        policy.touch(&1);
        assert_eq!(policy.replace_candidate(), Some(&1));
        policy.erase(&1);
        assert_eq!(policy.replace_candidate(), Some(&3));
    }
}
