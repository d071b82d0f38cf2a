use linked_hash_set::LinkedHashSet;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::policy::EvictionPolicy;

/// LfuPolicy evicts the least frequently used key.
///
/// Every key carries an access count, starting at 1 on insertion and growing by 1 on each touch.
/// Keys are grouped in buckets by count; the candidate is taken from the lowest non-empty bucket.
/// Among keys never touched since insertion, the newest goes first. In every other bucket, the key
/// that reached that count earliest goes first.
///
/// Example:
/// ```
/// use polycache::{Cache, LfuPolicy};
///
/// let cache = Cache::<&str, i32, LfuPolicy<&str>>::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.contains(&"a");
/// cache.contains(&"a");
/// cache.contains(&"b");
/// cache.insert("c", 3);
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct LfuPolicy<K: Eq + Hash> {
    counter: HashMap<K, u64>,
    freq_map: BTreeMap<u64, LinkedHashSet<K>>,
}

impl<K: Eq + Hash + Clone> LfuPolicy<K> {
    /// Create an empty LfuPolicy.
    pub fn new() -> Self {
        LfuPolicy {
            counter: HashMap::new(),
            freq_map: BTreeMap::new(),
        }
    }

    /// The access count of a tracked key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.counter.get(key).copied()
    }

    fn detach(&mut self, key: &K, freq: u64) {
        if let Some(bucket) = self.freq_map.get_mut(&freq) {
            bucket.remove(key);
            if bucket.is_empty() {
                self.freq_map.remove(&freq);
            }
        }
    }
}

impl<K: Eq + Hash + Clone> Default for LfuPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for LfuPolicy<K> {
    fn insert(&mut self, key: K) {
        let previous = self.counter.insert(key.clone(), 1);
        assert!(previous.is_none(), "LFU policy asked to insert a key it already tracks");
        self.freq_map.entry(1).or_default().insert(key);
    }

    fn touch(&mut self, key: &K) {
        let Some(count) = self.counter.get_mut(key) else {
            panic!("LFU policy asked to touch a key it does not track");
        };
        let freq = *count;
        *count += 1;
        self.detach(key, freq);
        self.freq_map
            .entry(freq + 1)
            .or_default()
            .insert(key.clone());
    }

    fn erase(&mut self, key: &K) {
        let Some(freq) = self.counter.remove(key) else {
            panic!("LFU policy asked to erase a key it does not track");
        };
        self.detach(key, freq);
    }

    /// The newest untouched key, else the oldest key of the lowest frequency bucket.
    fn replace_candidate(&self) -> Option<&K> {
        let (freq, bucket) = self.freq_map.first_key_value()?;
        if *freq == 1 {
            bucket.back()
        } else {
            bucket.front()
        }
    }

    fn clear(&mut self) {
        self.counter.clear();
        self.freq_map.clear();
    }

    fn len(&self) -> usize {
        self.counter.len()
    }
}
