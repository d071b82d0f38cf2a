use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{CacheBuilder, CacheConfig};
use crate::error::{CacheError, Result};
use crate::lock::{LockStrategy, NullLock};
use crate::policy::none::NonePolicy;
use crate::policy::EvictionPolicy;
use crate::stats::basic::BasicStats;
use crate::stats::{CacheStats, StatsProvider};

/// The state a cache protects with its lock.
struct CacheInner<K, V, P, S> {
    max_size: NonZeroUsize,
    map: HashMap<K, Arc<V>>,
    policy: P,
    stats: S,
}

impl<K, V, P, S> CacheInner<K, V, P, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    S: StatsProvider<K, V>,
{
    /// The single lookup path shared by every accessor that can miss.
    fn find_key(&mut self, key: &K) -> Option<Arc<V>> {
        match self.map.get(key) {
            Some(value) => {
                self.stats.hit(key, value);
                self.policy.touch(key);
                Some(Arc::clone(value))
            }
            None => {
                self.stats.miss(key);
                None
            }
        }
    }

    /// Evict the policy's candidate if one more entry would exceed the capacity.
    fn make_room(&mut self) {
        if self.map.len() < self.max_size.get() {
            return;
        }
        let Some(victim) = self.policy.replace_candidate().cloned() else {
            panic!("eviction policy tracks no keys while the cache is full");
        };
        let Some(value) = self.map.remove(&victim) else {
            panic!("eviction policy nominated a key the cache does not hold");
        };
        self.policy.erase(&victim);
        self.stats.evict(&victim, &value);
        trace!(size = self.map.len(), "evicted cache entry");
    }

    /// Store a key that is known to be absent.
    fn insert_new(&mut self, key: K, value: Arc<V>) -> Arc<V> {
        self.make_room();
        self.policy.insert(key.clone());
        self.map.insert(key, Arc::clone(&value));
        value
    }

    fn remove_key(&mut self, key: &K) -> Option<Arc<V>> {
        match self.map.remove(key) {
            Some(value) => {
                self.stats.hit(key, &value);
                self.policy.erase(key);
                self.stats.erase(key, &value);
                trace!(size = self.map.len(), "erased cache entry");
                Some(value)
            }
            None => {
                self.stats.miss(key);
                None
            }
        }
    }

    fn clear(&mut self) {
        self.map.clear();
        self.policy.clear();
        self.stats.clear();
        debug!(max_size = self.max_size.get(), "cleared cache");
    }

    fn check_invariants(&self) {
        debug_assert!(self.map.len() <= self.max_size.get());
        debug_assert_eq!(self.policy.len(), self.map.len());
    }
}

impl<K, V, P, S> CacheInner<K, V, P, S>
where
    K: Clone,
    P: Clone,
    S: Clone,
{
    fn duplicate(&self) -> Self {
        CacheInner {
            max_size: self.max_size,
            map: self.map.clone(),
            policy: self.policy.clone(),
            stats: self.stats.clone(),
        }
    }
}

/// Cache is a bounded key-value container with a pluggable eviction policy.
///
/// + `P` decides which key is evicted when the cache is full (default: [`NonePolicy`]).
/// + `L` serialises access to the cache state (default: [`NullLock`], single threaded).
/// + `S` receives hit, miss, erase, evict and clear events (default: [`BasicStats`]).
///
/// Every operation, including the read-only looking ones, runs under the lock for its whole
/// duration because lookups update the policy and the statistics. Values are stored as `Arc`s and
/// returned as shared handles.
///
/// Example:
/// ```
/// use polycache::{Cache, LruPolicy};
///
/// let cache = Cache::<String, String, LruPolicy<String>>::new(10).unwrap();
///
/// let (_, inserted) = cache.insert("key".to_string(), "value".to_string());
/// assert!(inserted);
///
/// let value = cache.find(&"key".to_string());
/// assert_eq!(value.as_deref().map(String::as_str), Some("value"));
/// assert_eq!(cache.hit_count(), 1);
/// println!("{:?}", cache.stats());
/// ```
pub struct Cache<K, V, P = NonePolicy<K>, L = NullLock, S = BasicStats>
where
    K: Eq + Hash,
    L: LockStrategy,
{
    inner: L::Guarded<CacheInner<K, V, P, S>>,
}

impl<K, V, P, L, S> Cache<K, V, P, L, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: LockStrategy,
    S: StatsProvider<K, V>,
{
    /// Create a cache holding at most `max_size` entries, with default policy and statistics.
    pub fn new(max_size: usize) -> Result<Self>
    where
        P: Default,
        S: Default,
    {
        Self::with_parts(CacheConfig::new(max_size), P::default(), S::default())
    }

    /// Start a [`CacheBuilder`] for a cache holding at most `max_size` entries.
    pub fn builder(max_size: usize) -> CacheBuilder<K, V, P, L, S>
    where
        P: Default,
        S: Default,
    {
        CacheBuilder::new(CacheConfig::new(max_size), P::default(), S::default())
    }

    /// Create a cache from a configuration and explicit policy and statistics instances.
    pub fn with_parts(config: CacheConfig, policy: P, stats: S) -> Result<Self> {
        let max_size = config.validate()?;
        debug_assert!(policy.is_empty());
        debug!(max_size = max_size.get(), "created cache");
        Ok(Cache {
            inner: L::new(CacheInner {
                max_size,
                map: HashMap::new(),
                policy,
                stats,
            }),
        })
    }

    fn locked<R>(&self, f: impl FnOnce(&mut CacheInner<K, V, P, S>) -> R) -> R {
        L::with::<CacheInner<K, V, P, S>, R>(&self.inner, |inner| {
            let result = f(inner);
            inner.check_invariants();
            result
        })
    }

    /// Number of entries currently stored.
    pub fn size(&self) -> usize {
        self.locked(|inner| inner.map.len())
    }

    /// Whether no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The capacity fixed at construction.
    pub fn max_size(&self) -> usize {
        self.locked(|inner| inner.max_size.get())
    }

    /// Whether `key` is cached. Counts as a hit or a miss.
    pub fn contains(&self, key: &K) -> bool {
        self.locked(|inner| inner.find_key(key).is_some())
    }

    /// 1 if `key` is cached, 0 otherwise. Counts as a hit or a miss.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains(key))
    }

    /// The value stored for `key`. Counts as a hit or a miss.
    pub fn find(&self, key: &K) -> Option<Arc<V>> {
        self.locked(|inner| inner.find_key(key))
    }

    /// The value stored for `key`, or [`CacheError::KeyNotFound`]. Counts as a hit or a miss.
    pub fn at(&self, key: &K) -> Result<Arc<V>> {
        self.find(key).ok_or(CacheError::KeyNotFound)
    }

    /// Alias of [`Cache::at`].
    pub fn lookup(&self, key: &K) -> Result<Arc<V>> {
        self.at(key)
    }

    /// The value stored for `key`, inserting `V::default()` first if it is absent.
    ///
    /// This is a modification function: it records neither a hit nor a miss.
    pub fn get_or_default(&self, key: K) -> Arc<V>
    where
        V: Default,
    {
        self.emplace(key, V::default).0
    }

    /// Mutate the value stored for `key` in place, inserting `V::default()` first if it is absent.
    ///
    /// Values shared with outstanding handles are cloned before mutation. Records neither a hit
    /// nor a miss.
    pub fn modify<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
    where
        V: Default + Clone,
    {
        self.locked(|inner| {
            if let Some(slot) = inner.map.get_mut(&key) {
                inner.policy.touch(&key);
                return f(Arc::make_mut(slot));
            }
            let mut value = V::default();
            let result = f(&mut value);
            inner.insert_new(key, Arc::new(value));
            result
        })
    }

    /// Insert or update `key`.
    ///
    /// Returns the stored value and whether the key was newly inserted. When the cache is full and
    /// the key is new, the policy's candidate is evicted first. Records neither a hit nor a miss.
    pub fn insert(&self, key: K, value: V) -> (Arc<V>, bool) {
        let value = Arc::new(value);
        self.locked(|inner| {
            if let Some(slot) = inner.map.get_mut(&key) {
                *slot = Arc::clone(&value);
                inner.policy.touch(&key);
                return (value, false);
            }
            (inner.insert_new(key, value), true)
        })
    }

    /// Insert every pair of `entries`, taking the lock once per pair.
    ///
    /// Returns how many keys were newly inserted.
    pub fn insert_all(&self, entries: impl IntoIterator<Item = (K, V)>) -> usize {
        entries
            .into_iter()
            .map(|(key, value)| self.insert(key, value).1)
            .filter(|inserted| *inserted)
            .count()
    }

    /// Insert `key` with a value built by `make`, unless it is already present.
    ///
    /// `make` only runs when the key is absent. An existing entry is returned untouched (its
    /// policy position is still refreshed). Records neither a hit nor a miss.
    pub fn emplace(&self, key: K, make: impl FnOnce() -> V) -> (Arc<V>, bool) {
        self.locked(|inner| {
            if let Some(existing) = inner.map.get(&key) {
                let existing = Arc::clone(existing);
                inner.policy.touch(&key);
                return (existing, false);
            }
            let value = Arc::new(make());
            (inner.insert_new(key, value), true)
        })
    }

    /// Remove `key`, returning its value. Counts as a hit (plus an entry invalidation) or a miss.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.locked(|inner| inner.remove_key(key))
    }

    /// Remove `key`, returning how many entries were removed (0 or 1).
    pub fn erase(&self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    /// Remove every entry for which `predicate` returns true, under a single lock acquisition.
    ///
    /// Each removed entry counts as an entry invalidation; nothing counts as a hit or a miss.
    pub fn erase_if(&self, mut predicate: impl FnMut(&K, &V) -> bool) -> usize {
        self.locked(|inner| {
            let before = inner.map.len();
            let CacheInner {
                map, policy, stats, ..
            } = inner;
            map.retain(|key, value| {
                if !predicate(key, value) {
                    return true;
                }
                policy.erase(key);
                stats.erase(key, value);
                false
            });
            before - map.len()
        })
    }

    /// Alias of [`Cache::erase`].
    pub fn flush_key(&self, key: &K) -> usize {
        self.erase(key)
    }

    /// Alias of [`Cache::clear`].
    pub fn flush(&self) {
        self.clear();
    }

    /// Remove every entry. Counts as exactly one cache invalidation.
    pub fn clear(&self) {
        self.locked(|inner| inner.clear());
    }

    /// A snapshot of every entry, in the storage's unspecified order.
    ///
    /// Taking the snapshot does not touch the policy or the statistics. Call again for a fresh
    /// sequence.
    pub fn entries(&self) -> std::vec::IntoIter<(K, Arc<V>)> {
        self.locked(|inner| {
            inner
                .map
                .iter()
                .map(|(key, value)| (key.clone(), Arc::clone(value)))
                .collect::<Vec<_>>()
                .into_iter()
        })
    }

    /// Visit every entry while holding the lock.
    pub fn for_each(&self, mut f: impl FnMut(&K, &V)) {
        self.locked(|inner| {
            for (key, value) in &inner.map {
                f(key, value);
            }
        });
    }

    /// A snapshot of every counter, plus the current size and capacity.
    pub fn stats(&self) -> CacheStats {
        self.locked(|inner| CacheStats {
            hits: inner.stats.hit_count(),
            misses: inner.stats.miss_count(),
            evictions: inner.stats.evicted_count(),
            entry_invalidations: inner.stats.entry_invalidation_count(),
            cache_invalidations: inner.stats.cache_invalidation_count(),
            size: inner.map.len() as u64,
            capacity: inner.max_size.get() as u64,
        })
    }

    /// Lookups that found their key.
    pub fn hit_count(&self) -> u64 {
        self.locked(|inner| inner.stats.hit_count())
    }

    /// Lookups that did not find their key.
    pub fn miss_count(&self) -> u64 {
        self.locked(|inner| inner.stats.miss_count())
    }

    /// Hits plus misses.
    pub fn access_count(&self) -> u64 {
        self.stats().accesses()
    }

    /// Entries removed explicitly by `erase`, `remove` or `erase_if`.
    pub fn entry_invalidation_count(&self) -> u64 {
        self.locked(|inner| inner.stats.entry_invalidation_count())
    }

    /// Calls to `clear` or `flush`.
    pub fn cache_invalidation_count(&self) -> u64 {
        self.locked(|inner| inner.stats.cache_invalidation_count())
    }

    /// Entries removed to make room for a new key.
    pub fn evicted_count(&self) -> u64 {
        self.locked(|inner| inner.stats.evicted_count())
    }

    /// NaN until the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        self.stats().hit_ratio()
    }

    /// NaN until the first lookup.
    pub fn miss_ratio(&self) -> f64 {
        self.stats().miss_ratio()
    }

    /// Current size divided by capacity.
    pub fn utilization(&self) -> f64 {
        self.stats().utilization()
    }
}

impl<K, V, P, L, S> Cache<K, V, P, L, S>
where
    K: Eq + Hash + Clone,
    P: Clone,
    L: LockStrategy,
    S: Clone,
{
    /// Overwrite this cache's entries, policy state, statistics and capacity with a copy of
    /// `source`'s.
    ///
    /// Both locks are taken in address order, so two threads copying in opposite directions
    /// cannot deadlock.
    pub fn copy_from(&self, source: &Self) {
        if std::ptr::eq(self, source) {
            return;
        }
        if (self as *const Self) < (source as *const Self) {
            L::with::<CacheInner<K, V, P, S>, ()>(&self.inner, |target| {
                L::with::<CacheInner<K, V, P, S>, ()>(&source.inner, |source| {
                    *target = source.duplicate();
                })
            });
        } else {
            L::with::<CacheInner<K, V, P, S>, ()>(&source.inner, |source| {
                L::with::<CacheInner<K, V, P, S>, ()>(&self.inner, |target| {
                    *target = source.duplicate();
                })
            });
        }
    }
}

impl<K, V, P, L, S> Clone for Cache<K, V, P, L, S>
where
    K: Eq + Hash + Clone,
    P: Clone,
    L: LockStrategy,
    S: Clone,
{
    /// Copy the cache under the source's lock. Values are shared with the source.
    fn clone(&self) -> Self {
        let inner = L::with::<CacheInner<K, V, P, S>, _>(&self.inner, |inner| inner.duplicate());
        Cache {
            inner: L::new(inner),
        }
    }
}

impl<K, V, P, L, S> IntoIterator for Cache<K, V, P, L, S>
where
    K: Eq + Hash,
    L: LockStrategy,
{
    type Item = (K, Arc<V>);
    type IntoIter = hash_map::IntoIter<K, Arc<V>>;

    fn into_iter(self) -> Self::IntoIter {
        L::into_inner::<CacheInner<K, V, P, S>>(self.inner)
            .map
            .into_iter()
    }
}

impl<K, V, P, L, S> fmt::Debug for Cache<K, V, P, L, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: LockStrategy,
    S: StatsProvider<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
