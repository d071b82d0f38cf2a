use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polycache::{memoize, Cache, LruPolicy, MutexLock, NullLock};

fn bench_lru_cache(c: &mut Criterion) {
    c.bench_function("lru_insert_1k", |b| {
        b.iter(|| {
            let cache = Cache::<i32, i32, LruPolicy<i32>>::new(100).unwrap();
            for i in 0..1000 {
                cache.insert(i, black_box(i + 1));
            }
        })
    });

    c.bench_function("lru_find_1k", |b| {
        let cache = Cache::<i32, i32, LruPolicy<i32>>::new(100).unwrap();
        for i in 0..1000 {
            cache.insert(i, i + 1);
        }
        b.iter(|| {
            for i in 0..1000 {
                black_box(cache.find(&i));
            }
        })
    });

    c.bench_function("lru_evict_1k", |b| {
        b.iter(|| {
            let cache = Cache::<i32, i32, LruPolicy<i32>>::new(50).unwrap();
            for i in 0..1000 {
                cache.insert(i, black_box(i));
            }
        })
    });

    c.bench_function("lru_mutex_4_threads", |b| {
        let cache = Arc::new(Cache::<i32, i32, LruPolicy<i32>, MutexLock>::new(100).unwrap());
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        for i in 0..250 {
                            let key = (t * 250 + i) % 150;
                            if cache.find(&key).is_none() {
                                cache.insert(key, i);
                            }
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        })
    });

    c.bench_function("lru_memoized_fib", |b| {
        b.iter(|| {
            let fib = memoize::<LruPolicy<u64>, NullLock, _, _, _>(
                |n: u64| {
                    let (mut current, mut next) = (0u64, 1u64);
                    for _ in 0..n {
                        (current, next) = (next, current.wrapping_add(next));
                    }
                    current
                },
                32,
            )
            .unwrap();
            for n in 0..1000u64 {
                black_box(fib(n % 64));
            }
        })
    });
}

criterion_group!(benches, bench_lru_cache);
criterion_main!(benches);
