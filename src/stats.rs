pub mod basic;
pub mod callbacks;
pub mod none;

/// StatsProvider receives every accounting event a cache produces.
///
/// The cache calls these hooks while holding its lock, right after the event happened:
///
/// + `hit`/`miss` come only from lookups (`contains`, `find`, `count`, `at`, `lookup`, `remove`,
///   `erase`). Insertion and modification functions never count as either.
/// + `erase` is an explicit removal of one entry by the caller.
/// + `evict` is a removal forced by capacity.
/// + `clear` fires once per whole-cache invalidation.
///
/// The count getters default to 0, so a provider that only reacts to events (see
/// [`CallbackStats`](crate::CallbackStats)) needs to implement nothing else.
pub trait StatsProvider<K, V> {
    fn hit(&mut self, key: &K, value: &V);
    fn miss(&mut self, key: &K);
    fn erase(&mut self, key: &K, value: &V);
    fn evict(&mut self, key: &K, value: &V);
    fn clear(&mut self);

    fn hit_count(&self) -> u64 {
        0
    }

    fn miss_count(&self) -> u64 {
        0
    }

    fn entry_invalidation_count(&self) -> u64 {
        0
    }

    fn cache_invalidation_count(&self) -> u64 {
        0
    }

    fn evicted_count(&self) -> u64 {
        0
    }
}

/// CacheStats is a point-in-time snapshot of a cache's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entry_invalidations: u64,
    pub cache_invalidations: u64,
    pub size: u64,
    pub capacity: u64,
}

impl CacheStats {
    /// Number of lookups, i.e. hits plus misses.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// `hits / (hits + misses)`, NaN before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        self.hits as f64 / self.accesses() as f64
    }

    /// `misses / (hits + misses)`, NaN before the first lookup.
    pub fn miss_ratio(&self) -> f64 {
        self.misses as f64 / self.accesses() as f64
    }

    /// `size / capacity`.
    pub fn utilization(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_stats_ratios() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            evictions: 0,
            entry_invalidations: 0,
            cache_invalidations: 0,
            size: 5,
            capacity: 10,
        };
        assert_eq!(stats.accesses(), 4);
        assert_eq!(stats.hit_ratio(), 0.75);
        assert_eq!(stats.miss_ratio(), 0.25);
        assert_eq!(stats.utilization(), 0.5);
    }

    #[test]
    fn test_cache_stats_ratios_without_accesses() {
        let stats = CacheStats {
            hits: 0,
            misses: 0,
            evictions: 0,
            entry_invalidations: 0,
            cache_invalidations: 0,
            size: 0,
            capacity: 10,
        };
        assert!(stats.hit_ratio().is_nan());
        assert!(stats.miss_ratio().is_nan());
        assert_eq!(stats.utilization(), 0.0);
    }
}
