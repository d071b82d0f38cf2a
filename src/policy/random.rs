use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// RandomPolicy evicts a uniformly random key.
///
/// Keys are stored densely in a vector with a key-to-slot index, so erasure is O(1) via
/// `swap_remove` and every tracked key has the same chance of being picked. The index is drawn
/// from the thread-local generator, which is seeded from the operating system.
///
/// Example:
/// ```
/// use polycache::{Cache, RandomPolicy};
///
/// let cache = Cache::<u32, u32, RandomPolicy<u32>>::new(2).unwrap();
/// cache.insert(1, 1);
/// cache.insert(2, 2);
/// cache.insert(3, 3);
///
/// assert_eq!(cache.size(), 2);
/// assert!(cache.contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct RandomPolicy<K: Eq + Hash> {
    keys: Vec<K>,
    slots: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> RandomPolicy<K> {
    /// Create an empty RandomPolicy.
    pub fn new() -> Self {
        RandomPolicy {
            keys: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for RandomPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for RandomPolicy<K> {
    fn insert(&mut self, key: K) {
        let previous = self.slots.insert(key.clone(), self.keys.len());
        assert!(previous.is_none(), "random policy asked to insert a key it already tracks");
        self.keys.push(key);
    }

    fn touch(&mut self, _key: &K) {}

    fn erase(&mut self, key: &K) {
        let Some(slot) = self.slots.remove(key) else {
            panic!("random policy asked to erase a key it does not track");
        };
        self.keys.swap_remove(slot);
        if let Some(moved) = self.keys.get(slot) {
            self.slots.insert(moved.clone(), slot);
        }
    }

    fn replace_candidate(&self) -> Option<&K> {
        if self.keys.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..self.keys.len());
        self.keys.get(index)
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.slots.clear();
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_policy_erase_keeps_index_consistent() {
        let mut policy = RandomPolicy::new();
        for key in 0..5 {
            policy.insert(key);
        }
        policy.erase(&0);
        policy.erase(&3);
        assert_eq!(policy.len(), 3);
        for (slot, key) in policy.keys.iter().enumerate() {
            assert_eq!(policy.slots[key], slot);
        }
        let remaining: HashSet<_> = policy.keys.iter().copied().collect();
        assert_eq!(remaining, HashSet::from([1, 2, 4]));
    }

    #[test]
    fn test_random_policy_candidate_covers_all_keys() {
        let mut policy = RandomPolicy::new();
        for key in 0..4 {
            policy.insert(key);
        }
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(*policy.replace_candidate().unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_random_policy_uniform_after_erase() {
        const DRAWS: usize = 4000;

        let mut policy = RandomPolicy::new();
        for key in ["a", "b", "c", "d", "e"] {
            policy.insert(key);
        }
        policy.erase(&"a");

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..DRAWS {
            *counts.entry(*policy.replace_candidate().unwrap()).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
        assert!(!counts.contains_key("a"));
        // expected 1000 per key with a standard deviation of about 27
        for (key, count) in &counts {
            assert!((800..=1200).contains(count), "{key} drawn {count} times");
        }
    }

    #[test]
    fn test_random_policy_clear() {
        let mut policy = RandomPolicy::new();
        policy.insert(1);
        policy.clear();
        assert_eq!(policy.replace_candidate(), None);
    }
}
