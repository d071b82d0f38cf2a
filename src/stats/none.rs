use crate::stats::StatsProvider;

/// NoStats ignores every event and reports zero for every counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStats;

impl<K, V> StatsProvider<K, V> for NoStats {
    #[inline]
    fn hit(&mut self, _key: &K, _value: &V) {}

    #[inline]
    fn miss(&mut self, _key: &K) {}

    #[inline]
    fn erase(&mut self, _key: &K, _value: &V) {}

    #[inline]
    fn evict(&mut self, _key: &K, _value: &V) {}

    #[inline]
    fn clear(&mut self) {}
}
