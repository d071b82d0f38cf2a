use polycache::{Cache, LfuPolicy};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Product {
    _id: String,
    _name: String,
    _price: f64,
}

fn fetch_from_api(id: &str) -> Product {
    // Simulate network delay
    thread::sleep(Duration::from_millis(300));
    Product {
        _id: id.to_string(),
        _name: format!("Product {}", id),
        _price: 100.0,
    }
}

fn get_product(id: &str, cache: &Cache<String, Product, LfuPolicy<String>>) -> Product {
    if let Some(cached) = cache.find(&id.to_string()) {
        return cached.as_ref().clone();
    }
    let product = fetch_from_api(id);
    cache.insert(id.to_string(), product.clone());
    product
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cache = Cache::<String, Product, LfuPolicy<String>>::new(2).unwrap();

    // product 1 five times, product 2 three times
    for _ in 0..5 {
        println!("Product: {:?}", get_product("1", &cache));
    }
    for _ in 0..3 {
        println!("Product: {:?}", get_product("2", &cache));
    }

    // product 3 pushes out the least popular entry
    println!("Product: {:?}", get_product("3", &cache));

    println!("product 1 cached: {}", cache.contains(&"1".to_string()));
    println!("product 2 cached: {}", cache.contains(&"2".to_string()));
    println!("{:?}", cache.stats());
}
