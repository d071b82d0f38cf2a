use polycache::{Cache, LruPolicy, MutexLock};
use rand::rng;
use rand::{seq::SliceRandom, Rng};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

type UserCache = Cache<String, UserData, LruPolicy<String>, MutexLock>;

#[derive(Debug, Clone)]
struct UserData {
    _id: String,
    _name: String,
    _email: String,
}

/// Simulates fetching user data from a database.
fn fetch_user_data(user_id: &str) -> UserData {
    thread::sleep(Duration::from_millis(300));
    UserData {
        _id: user_id.to_string(),
        _name: format!("User {}", user_id),
        _email: format!("user{}@example.com", user_id),
    }
}

fn get_user_data(user_id: &str, cache: &UserCache) -> UserData {
    if let Some(cached) = cache.find(&user_id.to_string()) {
        return cached.as_ref().clone();
    }
    let user_data = fetch_user_data(user_id);
    cache.insert(user_id.to_string(), user_data.clone());
    user_data
}

fn main() -> polycache::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let num_users = 20;
    let repetitions = 4;
    let num_threads = 10;
    let cache_capacity = 20;

    let mut user_ids: Vec<String> = (0..repetitions)
        .flat_map(|_| (0..num_users).map(|i| i.to_string()))
        .collect();
    user_ids.shuffle(&mut rng());

    let cache = UserCache::new(cache_capacity)?;
    let start = Instant::now();
    for user_id in &user_ids {
        get_user_data(user_id, &cache);
    }
    let single_duration = start.elapsed();
    println!("Single-threaded execution time: {:?}", single_duration);

    let shared = Arc::new(UserCache::new(cache_capacity)?);
    let start = Instant::now();
    let chunk_size = user_ids.len().div_ceil(num_threads);
    let handles: Vec<_> = user_ids
        .chunks(chunk_size)
        .map(|chunk| {
            let cache = Arc::clone(&shared);
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                let mut local_rng = rng();
                for user_id in &chunk {
                    thread::sleep(Duration::from_millis(local_rng.random_range(0..=3)));
                    get_user_data(user_id, &cache);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
    let multi_duration = start.elapsed();
    println!("Multithreaded execution time: {:?}", multi_duration);

    let speedup = single_duration.as_secs_f64() / multi_duration.as_secs_f64();
    println!("Multithreading speedup: {:.2}x", speedup);
    println!("Single-threaded stats: {:?}", cache.stats());
    println!("Multithreaded stats: {:?}", shared.stats());
    Ok(())
}
