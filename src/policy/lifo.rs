use linked_hash_set::LinkedHashSet;
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// LifoPolicy is a last-in-first-out eviction policy.
///
/// When the cache is full, the newest inserted key is evicted. Accesses do not change the order.
///
/// Example:
/// ```
/// use polycache::{Cache, LifoPolicy};
///
/// let cache = Cache::<&str, i32, LifoPolicy<&str>>::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.insert("c", 3);
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct LifoPolicy<K: Eq + Hash> {
    stack: LinkedHashSet<K>,
}

impl<K: Eq + Hash> LifoPolicy<K> {
    /// Create an empty LifoPolicy.
    pub fn new() -> Self {
        LifoPolicy {
            stack: LinkedHashSet::new(),
        }
    }
}

impl<K: Eq + Hash> Default for LifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> EvictionPolicy<K> for LifoPolicy<K> {
    fn insert(&mut self, key: K) {
        let inserted = self.stack.insert_if_absent(key);
        assert!(inserted, "LIFO policy asked to insert a key it already tracks");
    }

    fn touch(&mut self, _key: &K) {}

    fn erase(&mut self, key: &K) {
        let removed = self.stack.remove(key);
        assert!(removed, "LIFO policy asked to erase a key it does not track");
    }

    /// The newest inserted key.
    fn replace_candidate(&self) -> Option<&K> {
        self.stack.back()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_policy() {
        let mut policy = LifoPolicy::new();
        policy.insert(1);
        policy.insert(2);
        policy.insert(3);
        policy.touch(&1);
        assert_eq!(policy.replace_candidate(), Some(&3));
        policy.erase(&3);
        assert_eq!(policy.replace_candidate(), Some(&2));
        policy.erase(&1);
        assert_eq!(policy.replace_candidate(), Some(&2));
    }

    #[test]
    fn test_lifo_policy_clear() {
        let mut policy = LifoPolicy::new();
        policy.insert("a");
        policy.clear();
        assert_eq!(policy.replace_candidate(), None);
        policy.insert("a");
        assert_eq!(policy.len(), 1);
    }
}
