//! In-memory TTL cache for upstream responses. One cache per response type,
//! shared behind the client; entries expire on read.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

#[derive(Default)]
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a clone of the cached value, dropping it if expired.
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: impl Into<String>, value: T, ttl: Duration) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let cache: TtlCache<u32> = TtlCache::new();
        assert_eq!(cache.get("absent"), None);
    }

    #[test]
    fn live_entry_is_returned() {
        let cache = TtlCache::new();
        cache.insert("pikachu", 25_u32, Duration::from_secs(60));
        assert_eq!(cache.get("pikachu"), Some(25));
    }

    #[test]
    fn expired_entry_is_dropped() {
        let cache = TtlCache::new();
        cache.insert("pikachu", 25_u32, Duration::from_secs(0));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("pikachu"), None);
    }

    #[test]
    fn reinsert_replaces_value() {
        let cache = TtlCache::new();
        cache.insert("key", 1_u32, Duration::from_secs(60));
        cache.insert("key", 2_u32, Duration::from_secs(60));
        assert_eq!(cache.get("key"), Some(2));
    }
}
