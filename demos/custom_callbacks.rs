use polycache::{Cache, CallbackStats, LruPolicy};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let callbacks = CallbackStats::new()
        .on_hit(|key: &i32, value: &i32| println!("hit for entry ({key}, {value})"))
        .on_miss(|key: &i32| println!("miss for key {key}"))
        .on_erase(|key: &i32, value: &i32| println!("erasing entry ({key}, {value})"))
        .on_evict(|key: &i32, value: &i32| println!("evicted entry ({key}, {value})"))
        .on_clear(|| println!("cache cleared"));

    let cache = Cache::<i32, i32, LruPolicy<i32>>::builder(2)
        .stats(callbacks)
        .build()
        .unwrap();

    cache.contains(&23);
    cache.insert(23, 4);
    cache.erase(&40);
    cache.insert(33, 0);
    if cache.find(&90).is_none() {
        println!("key 90 not found");
    }
    cache.contains(&23);
    cache.insert(7, 7);
    cache.erase(&23);
    cache.clear();

    // Callback providers count nothing.
    println!("hits recorded: {}", cache.hit_count());
}
