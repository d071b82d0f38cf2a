use std::hash::Hash;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use crate::cache::Cache;
use crate::error::{CacheError, Result};
use crate::lock::LockStrategy;
use crate::policy::EvictionPolicy;
use crate::stats::StatsProvider;

/// Construction parameters of a cache.
///
/// `max_size` is the number of distinct keys the cache may hold at once. Zero is rejected with
/// [`CacheError::InvalidCapacity`]; there is no "unbounded" setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_size: usize,
}

impl CacheConfig {
    pub fn new(max_size: usize) -> Self {
        CacheConfig { max_size }
    }

    /// Check the configuration, returning the capacity as a `NonZeroUsize`.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.max_size).ok_or(CacheError::InvalidCapacity {
            max_size: self.max_size,
        })
    }
}

/// Fluent builder for [`Cache`], obtained from [`Cache::builder`].
///
/// Each setter may change the corresponding type parameter, so a builder started from the
/// default types can end up with any policy, lock strategy and statistics provider.
///
/// Example:
/// ```
/// use polycache::{Cache, LfuPolicy, MutexLock, NoStats};
///
/// let cache = Cache::<String, u64>::builder(64)
///     .policy(LfuPolicy::new())
///     .lock::<MutexLock>()
///     .stats(NoStats)
///     .build()
///     .unwrap();
///
/// cache.insert("answer".to_string(), 42);
/// assert_eq!(cache.size(), 1);
/// assert_eq!(cache.hit_count(), 0);
/// ```
pub struct CacheBuilder<K, V, P, L, S> {
    config: CacheConfig,
    policy: P,
    stats: S,
    _marker: PhantomData<fn() -> (K, V, L)>,
}

impl<K, V, P, L, S> CacheBuilder<K, V, P, L, S> {
    pub(crate) fn new(config: CacheConfig, policy: P, stats: S) -> Self {
        CacheBuilder {
            config,
            policy,
            stats,
            _marker: PhantomData,
        }
    }

    /// Replace the maximum number of entries.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.config.max_size = max_size;
        self
    }

    /// Use `policy` to pick eviction candidates.
    pub fn policy<P2>(self, policy: P2) -> CacheBuilder<K, V, P2, L, S> {
        CacheBuilder::new(self.config, policy, self.stats)
    }

    /// Report events to `stats`.
    pub fn stats<S2>(self, stats: S2) -> CacheBuilder<K, V, P, L, S2> {
        CacheBuilder::new(self.config, self.policy, stats)
    }

    /// Serialise access with the lock strategy `L2`.
    pub fn lock<L2>(self) -> CacheBuilder<K, V, P, L2, S> {
        CacheBuilder::new(self.config, self.policy, self.stats)
    }
}

impl<K, V, P, L, S> CacheBuilder<K, V, P, L, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: LockStrategy,
    S: StatsProvider<K, V>,
{
    /// Validate the configuration and create the cache.
    pub fn build(self) -> Result<Cache<K, V, P, L, S>> {
        Cache::with_parts(self.config, self.policy, self.stats)
    }
}
