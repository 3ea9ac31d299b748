//! A bounded LRU cache assembled from `CacheList` plus a payload map.
//!
//! Run with: `RUST_LOG=nodechain=trace cargo run --example lru_cache`

use std::collections::HashMap;
use std::hash::Hash;

use nodechain::ds::CacheList;
use tracing_subscriber::EnvFilter;

struct LruCache<K, V> {
    capacity: usize,
    recency: CacheList<K, ()>,
    store: HashMap<K, V>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recency: CacheList::with_capacity(capacity),
            store: HashMap::with_capacity(capacity),
        }
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if !self.recency.move_to_head_by_key(key) {
            return None;
        }
        self.store.get(key)
    }

    fn put(&mut self, key: K, value: V) {
        if self.recency.move_to_head_by_key(&key) {
            self.store.insert(key, value);
            return;
        }
        if self.recency.prepend_key(key.clone(), ()).is_err() {
            return;
        }
        self.store.insert(key, value);
        if self.store.len() > self.capacity
            && let Some(evicted) = self.recency.pop_key()
        {
            self.store.remove(&evicted);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.put(1, "alpha".to_string());
    cache.put(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }

    cache.put(3, "gamma".to_string());

    println!("contains 2? {}", cache.get(&2).is_some());
    let order: Vec<_> = cache.recency.keys().copied().collect();
    println!("recency (MRU first): {:?}", order);
}

// Expected output:
// hit 1: alpha
// contains 2? false
// recency (MRU first): [3, 1]
