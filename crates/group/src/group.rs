//! Named cache namespace with load-through on miss

use crate::loader::Loader;
use loadcache_core::{ByteView, Error, Result};
use loadcache_lru::ConcurrentCache;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A cache namespace paired with the loader that fills it.
///
/// Only the cache contents change after construction. Groups are shared as
/// `Arc<CacheGroup>` and are safe to read from many threads at once.
pub struct CacheGroup {
    name: String,
    loader: Arc<dyn Loader>,
    cache: ConcurrentCache<ByteView>,
}

impl CacheGroup {
    pub(crate) fn new(name: String, cache_bytes: u64, loader: Arc<dyn Loader>) -> Self {
        Self {
            name,
            loader,
            cache: ConcurrentCache::new(cache_bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte budget of this group's cache (zero for unbounded)
    pub fn cache_bytes(&self) -> u64 {
        self.cache.cache_bytes()
    }

    /// Number of values currently cached
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Bytes currently charged against the budget
    pub fn cached_bytes(&self) -> u64 {
        self.cache.used_bytes()
    }

    /// Return the value for `key`, loading and caching it on a miss.
    ///
    /// Loader failures are returned as [`Error::Loader`] with the loader's
    /// own error inside, and leave the cache untouched.
    pub fn get(&self, key: &str) -> Result<ByteView> {
        if key.is_empty() {
            return Err(Error::invalid_argument("key", "key is required"));
        }

        if let Some(value) = self.cache.get(key) {
            debug!(group = %self.name, key, "cache hit");
            return Ok(value);
        }

        self.load(key)
    }

    // Peer lookup would slot in here ahead of the local loader.
    fn load(&self, key: &str) -> Result<ByteView> {
        self.get_locally(key)
    }

    fn get_locally(&self, key: &str) -> Result<ByteView> {
        let bytes = self.loader.fetch(key).map_err(|e| {
            debug!(group = %self.name, key, error = %e, "loader failed");
            Error::Loader(e)
        })?;

        let value = ByteView::from(bytes);
        debug!(group = %self.name, key, bytes = value.len(), "loaded from source");
        self.populate_cache(key, value.clone());
        Ok(value)
    }

    fn populate_cache(&self, key: &str, value: ByteView) {
        self.cache.add(key, value);
    }
}

impl fmt::Debug for CacheGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheGroup")
            .field("name", &self.name)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
