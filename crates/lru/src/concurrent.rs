//! Thread-safe wrapper around a lazily created [`LruCache`]

use crate::lru::LruCache;
use loadcache_core::{ByteView, Sizeable};
use parking_lot::Mutex;

/// An [`LruCache`] behind a mutex.
///
/// The inner cache is only allocated by the first `add`, so namespaces that
/// are never written to cost nothing beyond this struct. Every operation holds
/// the lock for its whole body, so callers never observe a half-applied add.
#[derive(Debug)]
pub struct ConcurrentCache<V = ByteView> {
    cache_bytes: u64,
    lru: Mutex<Option<LruCache<V>>>,
}

impl<V: Sizeable + Clone> ConcurrentCache<V> {
    /// Create an empty cache with a budget of `cache_bytes` (zero for unbounded)
    pub fn new(cache_bytes: u64) -> Self {
        Self {
            cache_bytes,
            lru: Mutex::new(None),
        }
    }

    /// Look up `key`, promoting it on a hit
    pub fn get(&self, key: &str) -> Option<V> {
        let mut lru = self.lru.lock();
        lru.as_mut()?.get(key).cloned()
    }

    /// Insert or replace `key`, evicting older entries as needed
    pub fn add(&self, key: impl Into<String>, value: V) {
        let mut lru = self.lru.lock();
        let cache_bytes = self.cache_bytes;
        lru.get_or_insert_with(|| {
            tracing::trace!(cache_bytes, "allocating lru cache");
            LruCache::new(cache_bytes)
        })
        .add(key, value);
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.lru.lock().as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes currently charged against the budget
    pub fn used_bytes(&self) -> u64 {
        self.lru.lock().as_ref().map_or(0, LruCache::used_bytes)
    }

    pub fn cache_bytes(&self) -> u64 {
        self.cache_bytes
    }

    /// Whether the first write has happened yet
    pub fn is_initialized(&self) -> bool {
        self.lru.lock().is_some()
    }
}
