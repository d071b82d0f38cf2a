//! A generic key-value cache with pluggable eviction policies.
//!
//! [`Cache`] couples a hash map with three strategies chosen through type parameters:
//!
//! + an [`EvictionPolicy`] naming the key to evict when the cache is full
//!   ([`FifoPolicy`], [`LifoPolicy`], [`LruPolicy`], [`MruPolicy`], [`LfuPolicy`],
//!   [`RandomPolicy`] or the unordered default [`NonePolicy`]),
//! + a [`LockStrategy`] serialising access ([`NullLock`] or [`MutexLock`]),
//! + a [`StatsProvider`] receiving hit, miss, erase, evict and clear events ([`BasicStats`],
//!   [`NoStats`] or [`CallbackStats`]).
//!
//! [`memoize`] turns a pure function into a cached one.
pub mod cache;
pub mod config;
pub mod error;
pub mod lock;
pub mod policy;
pub mod stats;
pub mod wrapper;

pub use crate::cache::Cache;
pub use crate::config::{CacheBuilder, CacheConfig};
pub use crate::error::{CacheError, Result};
pub use crate::lock::{LockStrategy, MutexLock, NullLock};
pub use crate::policy::fifo::FifoPolicy;
pub use crate::policy::lfu::LfuPolicy;
pub use crate::policy::lifo::LifoPolicy;
pub use crate::policy::lru::LruPolicy;
pub use crate::policy::mru::MruPolicy;
pub use crate::policy::none::NonePolicy;
pub use crate::policy::random::RandomPolicy;
pub use crate::policy::EvictionPolicy;
pub use crate::stats::basic::BasicStats;
pub use crate::stats::callbacks::CallbackStats;
pub use crate::stats::none::NoStats;
pub use crate::stats::{CacheStats, StatsProvider};
pub use crate::wrapper::memoize;
