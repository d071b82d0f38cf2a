use std::fmt;

use crate::stats::StatsProvider;

type EntryCallback<K, V> = Box<dyn FnMut(&K, &V) + Send>;
type KeyCallback<K> = Box<dyn FnMut(&K) + Send>;
type ClearCallback = Box<dyn FnMut() + Send>;

/// CallbackStats forwards cache events to user supplied closures instead of counting them.
///
/// Every callback is optional; unset events are ignored. Callbacks run while the cache lock is
/// held, so they must not call back into the same cache.
///
/// Example:
/// ```
/// use polycache::{Cache, CallbackStats, LruPolicy};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let evicted = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&evicted);
/// let stats = CallbackStats::new().on_evict(move |_key: &u32, _value: &u32| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// let cache = Cache::<u32, u32, LruPolicy<u32>>::builder(1)
///     .stats(stats)
///     .build()
///     .unwrap();
/// cache.insert(1, 1);
/// cache.insert(2, 2);
/// assert_eq!(evicted.load(Ordering::Relaxed), 1);
/// ```
pub struct CallbackStats<K, V> {
    on_hit: Option<EntryCallback<K, V>>,
    on_miss: Option<KeyCallback<K>>,
    on_erase: Option<EntryCallback<K, V>>,
    on_evict: Option<EntryCallback<K, V>>,
    on_clear: Option<ClearCallback>,
}

impl<K, V> CallbackStats<K, V> {
    pub fn new() -> Self {
        CallbackStats {
            on_hit: None,
            on_miss: None,
            on_erase: None,
            on_evict: None,
            on_clear: None,
        }
    }

    pub fn on_hit(mut self, callback: impl FnMut(&K, &V) + Send + 'static) -> Self {
        self.on_hit = Some(Box::new(callback));
        self
    }

    pub fn on_miss(mut self, callback: impl FnMut(&K) + Send + 'static) -> Self {
        self.on_miss = Some(Box::new(callback));
        self
    }

    pub fn on_erase(mut self, callback: impl FnMut(&K, &V) + Send + 'static) -> Self {
        self.on_erase = Some(Box::new(callback));
        self
    }

    pub fn on_evict(mut self, callback: impl FnMut(&K, &V) + Send + 'static) -> Self {
        self.on_evict = Some(Box::new(callback));
        self
    }

    pub fn on_clear(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_clear = Some(Box::new(callback));
        self
    }
}

impl<K, V> Default for CallbackStats<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for CallbackStats<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackStats")
            .field("on_hit", &self.on_hit.is_some())
            .field("on_miss", &self.on_miss.is_some())
            .field("on_erase", &self.on_erase.is_some())
            .field("on_evict", &self.on_evict.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .finish()
    }
}

impl<K, V> StatsProvider<K, V> for CallbackStats<K, V> {
    fn hit(&mut self, key: &K, value: &V) {
        if let Some(callback) = self.on_hit.as_mut() {
            callback(key, value);
        }
    }

    fn miss(&mut self, key: &K) {
        if let Some(callback) = self.on_miss.as_mut() {
            callback(key);
        }
    }

    fn erase(&mut self, key: &K, value: &V) {
        if let Some(callback) = self.on_erase.as_mut() {
            callback(key, value);
        }
    }

    fn evict(&mut self, key: &K, value: &V) {
        if let Some(callback) = self.on_evict.as_mut() {
            callback(key, value);
        }
    }

    fn clear(&mut self) {
        if let Some(callback) = self.on_clear.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_callback_stats_forwards_events() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (hit_log, miss_log, clear_log) = (Arc::clone(&log), Arc::clone(&log), Arc::clone(&log));
        let mut stats = CallbackStats::<&str, i32>::new()
            .on_hit(move |k, v| hit_log.lock().unwrap().push(format!("hit {k}={v}")))
            .on_miss(move |k| miss_log.lock().unwrap().push(format!("miss {k}")))
            .on_clear(move || clear_log.lock().unwrap().push("clear".to_string()));

        stats.hit(&"a", &1);
        stats.miss(&"b");
        stats.evict(&"c", &3);
        stats.clear();

        assert_eq!(*log.lock().unwrap(), vec!["hit a=1", "miss b", "clear"]);
        assert_eq!(stats.hit_count(), 0);
    }
}
