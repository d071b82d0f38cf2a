use crate::stats::StatsProvider;

/// BasicStats counts every event with five monotonically increasing counters.
///
/// This is the default statistics provider of [`Cache`](crate::Cache).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    erasures: u64,
    invalidations: u64,
}

impl BasicStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> StatsProvider<K, V> for BasicStats {
    fn hit(&mut self, _key: &K, _value: &V) {
        self.hits += 1;
    }

    fn miss(&mut self, _key: &K) {
        self.misses += 1;
    }

    fn erase(&mut self, _key: &K, _value: &V) {
        self.erasures += 1;
    }

    fn evict(&mut self, _key: &K, _value: &V) {
        self.evictions += 1;
    }

    fn clear(&mut self) {
        self.invalidations += 1;
    }

    fn hit_count(&self) -> u64 {
        self.hits
    }

    fn miss_count(&self) -> u64 {
        self.misses
    }

    fn entry_invalidation_count(&self) -> u64 {
        self.erasures
    }

    fn cache_invalidation_count(&self) -> u64 {
        self.invalidations
    }

    fn evicted_count(&self) -> u64 {
        self.evictions
    }
}
