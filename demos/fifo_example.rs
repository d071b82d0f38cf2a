use polycache::{Cache, FifoPolicy};

fn fifo_fib(n: u64, cache: &Cache<u64, u64, FifoPolicy<u64>>) -> u64 {
    if n < 2 {
        return n;
    }
    if let Some(v) = cache.find(&n) {
        return *v;
    }
    let result = fifo_fib(n - 1, cache) + fifo_fib(n - 2, cache);
    cache.insert(n, result);
    result
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cache = Cache::<u64, u64, FifoPolicy<u64>>::new(10).unwrap();
    println!("{}", fifo_fib(10, &cache));
    println!("{:?}", cache.stats());
    println!("{}", fifo_fib(10, &cache));
    println!("{:?}", cache.stats());
    println!("{}", fifo_fib(20, &cache));
    println!("{:?}", cache.stats());
}
