use std::cell::RefCell;

use parking_lot::Mutex;

/// LockStrategy decides how a cache serialises access to its internal state.
///
/// A strategy is a marker type: it owns no data itself but chooses the container (`Guarded<T>`)
/// the cache state is stored in. Every cache operation runs inside exactly one call to
/// [`LockStrategy::with`], so operations on one cache observe a single total order.
///
/// The non-blocking [`LockStrategy::try_with`] is offered for callers building on top of a
/// strategy; the cache itself never uses it.
pub trait LockStrategy {
    /// The container that protects a value of type `T`.
    type Guarded<T>;

    /// Wrap `value` so it can only be reached through this strategy.
    fn new<T>(value: T) -> Self::Guarded<T>;

    /// Run `f` with exclusive access to the guarded value, blocking until it is available.
    fn with<T, R>(guarded: &Self::Guarded<T>, f: impl FnOnce(&mut T) -> R) -> R;

    /// Run `f` only if exclusive access can be obtained without blocking.
    fn try_with<T, R>(guarded: &Self::Guarded<T>, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Consume the container and hand back the value.
    fn into_inner<T>(guarded: Self::Guarded<T>) -> T;
}

/// NullLock performs no synchronisation and is meant for caches used from one thread.
///
/// State lives in a `RefCell`, which makes the cache `!Sync`: the compiler refuses to share it
/// between threads. Calling back into the same cache from inside one of its callbacks panics
/// instead of aliasing the state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLock;

impl LockStrategy for NullLock {
    type Guarded<T> = RefCell<T>;

    fn new<T>(value: T) -> RefCell<T> {
        RefCell::new(value)
    }

    fn with<T, R>(guarded: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *guarded.borrow_mut())
    }

    fn try_with<T, R>(guarded: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        guarded.try_borrow_mut().ok().map(|mut state| f(&mut *state))
    }

    fn into_inner<T>(guarded: RefCell<T>) -> T {
        guarded.into_inner()
    }
}

/// MutexLock serialises every cache operation through a `parking_lot::Mutex`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutexLock;

impl LockStrategy for MutexLock {
    type Guarded<T> = Mutex<T>;

    fn new<T>(value: T) -> Mutex<T> {
        Mutex::new(value)
    }

    fn with<T, R>(guarded: &Mutex<T>, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *guarded.lock())
    }

    fn try_with<T, R>(guarded: &Mutex<T>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        guarded.try_lock().map(|mut state| f(&mut *state))
    }

    fn into_inner<T>(guarded: Mutex<T>) -> T {
        guarded.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_lock_try_with_while_held() {
        let guarded = NullLock::new(1);
        let nested = NullLock::with(&guarded, |value| {
            *value += 1;
            NullLock::try_with(&guarded, |value| *value)
        });
        assert_eq!(nested, None);
        assert_eq!(NullLock::try_with(&guarded, |value| *value), Some(2));
        assert_eq!(NullLock::into_inner(guarded), 2);
    }

    #[test]
    fn test_mutex_lock_try_with_while_held() {
        let guarded = MutexLock::new(vec![1]);
        let nested = MutexLock::with(&guarded, |values| {
            values.push(2);
            MutexLock::try_with(&guarded, |values| values.len())
        });
        assert_eq!(nested, None);
        assert_eq!(MutexLock::try_with(&guarded, |values| values.len()), Some(2));
        assert_eq!(MutexLock::into_inner(guarded), vec![1, 2]);
    }
}
