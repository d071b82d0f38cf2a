use std::collections::HashSet;
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// NonePolicy keeps no ordering at all.
///
/// The candidate is whichever key the underlying hash set yields first. That choice is
/// deterministic for a given set state but otherwise unspecified; it is not random. This is the
/// default policy of [`Cache`](crate::Cache).
#[derive(Debug, Clone)]
pub struct NonePolicy<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> NonePolicy<K> {
    /// Create an empty NonePolicy.
    pub fn new() -> Self {
        NonePolicy {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> Default for NonePolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> EvictionPolicy<K> for NonePolicy<K> {
    fn insert(&mut self, key: K) {
        let inserted = self.keys.insert(key);
        assert!(inserted, "policy asked to insert a key it already tracks");
    }

    fn touch(&mut self, _key: &K) {}

    fn erase(&mut self, key: &K) {
        let removed = self.keys.remove(key);
        assert!(removed, "policy asked to erase a key it does not track");
    }

    fn replace_candidate(&self) -> Option<&K> {
        self.keys.iter().next()
    }

    fn clear(&mut self) {
        self.keys.clear();
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_policy_candidate_is_stable() {
        let mut policy = NonePolicy::new();
        policy.insert(10);
        policy.insert(20);
        policy.insert(30);
        let first = *policy.replace_candidate().unwrap();
        policy.touch(&first);
        assert_eq!(policy.replace_candidate(), Some(&first));
        policy.erase(&first);
        assert_eq!(policy.len(), 2);
        assert_ne!(policy.replace_candidate(), Some(&first));
    }
}
