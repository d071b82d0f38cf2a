use polycache::{Cache, LruPolicy};
use std::time::Instant;

// Fibonacci with LRU caching
fn lru_fib(n: u64, cache: &Cache<u64, u64, LruPolicy<u64>>) -> u64 {
    if n < 2 {
        return n;
    }
    if let Some(v) = cache.find(&n) {
        return *v;
    }
    let result = lru_fib(n - 1, cache) + lru_fib(n - 2, cache);
    cache.insert(n, result);
    result
}

// Fibonacci without caching (naive recursion)
fn naive_fib(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    naive_fib(n - 1) + naive_fib(n - 2)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let n = 40;

    let start = Instant::now();
    let result_naive = naive_fib(n);
    let duration_naive = start.elapsed();
    println!("Naive Fibonacci({n}) = {result_naive} (Time: {duration_naive:?})");

    let cache = Cache::<u64, u64, LruPolicy<u64>>::new(100).unwrap();
    let start = Instant::now();
    let result_cached = lru_fib(n, &cache);
    let duration_cached = start.elapsed();
    println!("Cached Fibonacci({n}) = {result_cached} (Time: {duration_cached:?})");

    assert_eq!(result_naive, result_cached);

    let speedup = duration_naive.as_secs_f64() / duration_cached.as_secs_f64();
    println!("Speedup: {speedup:.2}x");
    println!("Cache stats: {:?}", cache.stats());
    println!("Hit ratio: {:.3}", cache.hit_ratio());
}
