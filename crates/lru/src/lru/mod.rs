//! Least-recently-used cache with a byte budget
//!
//! Recency order is kept by an unbounded `lru::LruCache`; this layer adds
//! byte accounting on top. Every entry is charged
//! `key.len() + value.byte_len()` bytes. When an insertion or update pushes
//! the total over `max_bytes`, entries are evicted from the least recently
//! used end until the budget holds again. A budget of
//! [`UNBOUNDED_CACHE_BYTES`] disables eviction.

use loadcache_core::{Sizeable, UNBOUNDED_CACHE_BYTES};
use std::fmt;

/// Callback invoked with each entry evicted to satisfy the byte budget
pub type OnEvicted<V> = Box<dyn FnMut(String, V) + Send>;

fn charge(key: &str, value: &impl Sizeable) -> u64 {
    (key.len() + value.byte_len()) as u64
}

/// Byte-bounded LRU cache. Not thread-safe on its own; see
/// [`ConcurrentCache`](crate::ConcurrentCache).
pub struct LruCache<V> {
    max_bytes: u64,
    used_bytes: u64,
    entries: ::lru::LruCache<String, V>,
    on_evicted: Option<OnEvicted<V>>,
}

impl<V: Sizeable> LruCache<V> {
    /// Create a cache holding at most `max_bytes` (zero for unbounded)
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            entries: ::lru::LruCache::unbounded(),
            on_evicted: None,
        }
    }

    /// Create a cache that reports evicted entries to `on_evicted`
    pub fn with_on_evicted<F>(max_bytes: u64, on_evicted: F) -> Self
    where
        F: FnMut(String, V) + Send + 'static,
    {
        Self {
            on_evicted: Some(Box::new(on_evicted)),
            ..Self::new(max_bytes)
        }
    }

    /// Look up `key`, marking it as most recently used
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Look up `key` without touching the recency order
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries.peek(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Insert or replace `key`, then evict until the budget holds
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let added = charge(&key, &value);
        // The list is unbounded, so `push` only hands back a replaced entry
        match self.entries.push(key, value) {
            Some((old_key, old_value)) => {
                self.used_bytes = self.used_bytes + added - charge(&old_key, &old_value);
            }
            None => self.used_bytes += added,
        }

        while self.max_bytes != UNBOUNDED_CACHE_BYTES && self.used_bytes > self.max_bytes {
            if !self.remove_oldest() {
                break;
            }
        }
    }

    /// Evict the least recently used entry.
    ///
    /// Returns `false` when the cache was already empty.
    pub fn remove_oldest(&mut self) -> bool {
        let Some((key, value)) = self.entries.pop_lru() else {
            return false;
        };
        let freed = charge(&key, &value);
        self.used_bytes -= freed;
        tracing::trace!(key = %key, freed_bytes = freed, "evicted cache entry");

        if let Some(on_evicted) = self.on_evicted.as_mut() {
            on_evicted(key, value);
        }
        true
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> LruCache<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes currently charged against the budget
    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max_bytes", &self.max_bytes)
            .field("used_bytes", &self.used_bytes)
            .field("len", &self.entries.len())
            .field("on_evicted", &self.on_evicted.is_some())
            .finish()
    }
}
