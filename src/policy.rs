pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod none;
pub mod random;

/// EvictionPolicy tracks the keys stored in a cache and nominates the next one to evict.
///
/// A policy is a passive collaborator: the cache calls it while holding its lock and the policy
/// never calls back into the cache. The cache guarantees that the set of keys passed to
/// [`insert`](EvictionPolicy::insert) and not yet passed to [`erase`](EvictionPolicy::erase)
/// always equals its own key set, so implementations may treat a violation of the preconditions
/// below as a bug and panic.
///
/// Implementing the trait is enough to plug a custom strategy into [`Cache`](crate::Cache):
///
/// ```
/// use polycache::{Cache, EvictionPolicy};
///
/// /// Always evicts the smallest key.
/// #[derive(Default)]
/// struct SmallestFirst(std::collections::BTreeSet<u32>);
///
/// impl EvictionPolicy<u32> for SmallestFirst {
///     fn insert(&mut self, key: u32) { self.0.insert(key); }
///     fn touch(&mut self, _key: &u32) {}
///     fn erase(&mut self, key: &u32) { assert!(self.0.remove(key)); }
///     fn replace_candidate(&self) -> Option<&u32> { self.0.first() }
///     fn clear(&mut self) { self.0.clear(); }
///     fn len(&self) -> usize { self.0.len() }
/// }
///
/// let cache = Cache::<u32, &str, SmallestFirst>::new(2).unwrap();
/// cache.insert(7, "seven");
/// cache.insert(3, "three");
/// cache.insert(9, "nine");
/// assert!(!cache.contains(&3));
/// ```
pub trait EvictionPolicy<K> {
    /// Start tracking a key that was just stored. The key must not already be tracked.
    fn insert(&mut self, key: K);

    /// Record an access to a tracked key.
    fn touch(&mut self, key: &K);

    /// Stop tracking a key. The key must be tracked.
    fn erase(&mut self, key: &K);

    /// The key that should be evicted next, or `None` when nothing is tracked.
    fn replace_candidate(&self) -> Option<&K>;

    /// Stop tracking every key.
    fn clear(&mut self);

    /// Number of tracked keys.
    fn len(&self) -> usize;

    /// Whether no key is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
