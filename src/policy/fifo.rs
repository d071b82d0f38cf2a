use linked_hash_set::LinkedHashSet;
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// FifoPolicy is a first-in-first-out eviction policy.
///
/// When the cache is full, the oldest inserted key is evicted. Accesses do not change the order.
///
/// Example:
/// ```
/// use polycache::{Cache, FifoPolicy};
///
/// let cache = Cache::<&str, i32, FifoPolicy<&str>>::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.contains(&"a");
/// cache.insert("c", 3);
///
/// assert!(!cache.contains(&"a"));
/// assert!(cache.contains(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct FifoPolicy<K: Eq + Hash> {
    queue: LinkedHashSet<K>,
}

impl<K: Eq + Hash> FifoPolicy<K> {
    /// Create an empty FifoPolicy.
    pub fn new() -> Self {
        FifoPolicy {
            queue: LinkedHashSet::new(),
        }
    }
}

impl<K: Eq + Hash> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> EvictionPolicy<K> for FifoPolicy<K> {
    fn insert(&mut self, key: K) {
        let inserted = self.queue.insert_if_absent(key);
        assert!(inserted, "FIFO policy asked to insert a key it already tracks");
    }

    fn touch(&mut self, _key: &K) {}

    fn erase(&mut self, key: &K) {
        let removed = self.queue.remove(key);
        assert!(removed, "FIFO policy asked to erase a key it does not track");
    }

    /// The oldest inserted key.
    fn replace_candidate(&self) -> Option<&K> {
        self.queue.front()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_policy() {
        let mut policy = FifoPolicy::new();
        policy.insert(1);
        policy.insert(2);
        policy.insert(3);
        policy.touch(&1);
        assert_eq!(policy.replace_candidate(), Some(&1));
        policy.erase(&1);
        assert_eq!(policy.replace_candidate(), Some(&2));
        policy.erase(&3);
        assert_eq!(policy.replace_candidate(), Some(&2));
        assert_eq!(policy.len(), 1);
    }

    #[test]
    fn test_fifo_policy_clear() {
        let mut policy = FifoPolicy::new();
        policy.insert(1);
        policy.insert(2);
        policy.clear();
        assert!(policy.is_empty());
        assert_eq!(policy.replace_candidate(), None);
    }

    #[test]
    #[should_panic(expected = "does not track")]
    fn test_fifo_policy_erase_untracked() {
        let mut policy = FifoPolicy::<i32>::new();
        policy.erase(&1);
    }
}
