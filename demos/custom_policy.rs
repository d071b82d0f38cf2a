use linked_hash_set::LinkedHashSet;
use polycache::{Cache, EvictionPolicy};

/// A FIFO that gives up keys containing "test" before any other key.
#[derive(Debug, Default)]
struct TestKeysFirst {
    test_keys: LinkedHashSet<String>,
    other_keys: LinkedHashSet<String>,
}

impl TestKeysFirst {
    fn queue_for(&mut self, key: &str) -> &mut LinkedHashSet<String> {
        if key.contains("test") {
            &mut self.test_keys
        } else {
            &mut self.other_keys
        }
    }
}

impl EvictionPolicy<String> for TestKeysFirst {
    fn insert(&mut self, key: String) {
        let queue = self.queue_for(&key);
        assert!(queue.insert_if_absent(key));
    }

    fn touch(&mut self, _key: &String) {}

    fn erase(&mut self, key: &String) {
        assert!(self.queue_for(key).remove(key));
    }

    fn replace_candidate(&self) -> Option<&String> {
        self.test_keys.front().or_else(|| self.other_keys.front())
    }

    fn clear(&mut self) {
        self.test_keys.clear();
        self.other_keys.clear();
    }

    fn len(&self) -> usize {
        self.test_keys.len() + self.other_keys.len()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cache = Cache::<String, u32, TestKeysFirst>::new(3).unwrap();
    cache.insert("alpha".to_string(), 1);
    cache.insert("test-1".to_string(), 2);
    cache.insert("beta".to_string(), 3);

    // Full: the "test" key goes first even though "alpha" is older.
    cache.insert("gamma".to_string(), 4);
    println!("test-1 cached: {}", cache.contains(&"test-1".to_string()));

    // No "test" key left, so the policy falls back to FIFO order.
    cache.insert("delta".to_string(), 5);
    println!("alpha cached: {}", cache.contains(&"alpha".to_string()));

    let mut keys: Vec<String> = cache.entries().map(|(key, _)| key).collect();
    keys.sort();
    println!("remaining keys: {keys:?}");
    println!("{:?}", cache.stats());
}
