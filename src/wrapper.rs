use std::hash::Hash;

use crate::cache::Cache;
use crate::error::Result;
use crate::lock::LockStrategy;
use crate::policy::EvictionPolicy;
use crate::stats::none::NoStats;

/// Wrap a pure function so repeated calls with the same arguments are answered from a cache.
///
/// The returned closure owns one `Cache<A, R, P, L, NoStats>` holding at most `max_size` results.
/// Multiple arguments are passed as a tuple, which becomes the cache key. `f` runs outside the
/// cache lock, so two threads missing on the same arguments may both compute the result; the
/// second insertion simply updates the entry.
///
/// Pick [`MutexLock`](crate::MutexLock) for `L` to share the memoized function between threads.
///
/// Example:
/// ```
/// use polycache::{memoize, LruPolicy, NullLock};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let add = memoize::<LruPolicy<(u64, u64)>, NullLock, _, _, _>(
///     |(a, b): (u64, u64)| {
///         calls.set(calls.get() + 1);
///         a + b
///     },
///     16,
/// )
/// .unwrap();
///
/// assert_eq!(add((2, 3)), 5);
/// assert_eq!(add((2, 3)), 5);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn memoize<P, L, A, R, F>(f: F, max_size: usize) -> Result<impl Fn(A) -> R>
where
    P: EvictionPolicy<A> + Default,
    L: LockStrategy,
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    let cache = Cache::<A, R, P, L, NoStats>::new(max_size)?;
    Ok(move |args: A| {
        if let Some(cached) = cache.find(&args) {
            return R::clone(&cached);
        }
        let result = f(args.clone());
        cache.insert(args, result.clone());
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CacheError, FifoPolicy, LruPolicy, MutexLock, NullLock};
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_memoize_calls_function_once_per_argument() {
        let calls = RefCell::new(Vec::new());
        let square = memoize::<LruPolicy<u32>, NullLock, _, _, _>(
            |x: u32| {
                calls.borrow_mut().push(x);
                x * x
            },
            8,
        )
        .unwrap();

        assert_eq!(square(3), 9);
        assert_eq!(square(4), 16);
        assert_eq!(square(3), 9);
        assert_eq!(*calls.borrow(), vec![3, 4]);
    }

    #[test]
    fn test_memoize_recomputes_evicted_results() {
        let calls = AtomicUsize::new(0);
        let double = memoize::<FifoPolicy<u32>, NullLock, _, _, _>(
            |x: u32| {
                calls.fetch_add(1, Ordering::Relaxed);
                x * 2
            },
            1,
        )
        .unwrap();

        double(1);
        double(2);
        double(1);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_memoize_rejects_zero_capacity() {
        let result = memoize::<LruPolicy<u32>, NullLock, _, _, _>(|x: u32| x, 0);
        assert_eq!(result.err(), Some(CacheError::InvalidCapacity { max_size: 0 }));
    }

    #[test]
    fn test_memoize_shared_between_threads() {
        let calls = AtomicUsize::new(0);
        let slow_len = memoize::<LruPolicy<String>, MutexLock, _, _, _>(
            |s: String| {
                calls.fetch_add(1, Ordering::Relaxed);
                s.len()
            },
            4,
        )
        .unwrap();

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(slow_len("hello".to_string()), 5);
                    }
                });
            }
        });
        assert!(calls.load(Ordering::Relaxed) <= 4);
    }
}
