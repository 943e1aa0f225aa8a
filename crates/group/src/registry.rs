//! Caller-owned registry of cache groups

use crate::group::CacheGroup;
use crate::loader::{Loader, LoaderFn};
use loadcache_core::{CacheSettings, Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Name to group mapping shared by everything that creates or resolves
/// groups.
///
/// Creation takes the write lock; lookups take the read lock and may run
/// concurrently. Creating a group under an existing name replaces it.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: RwLock<HashMap<String, Arc<CacheGroup>>>,
    settings: CacheSettings,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CacheSettings) -> Self {
        Self {
            groups: RwLock::default(),
            settings,
        }
    }

    /// Create a group named `name` backed by `loader` and register it
    pub fn create_group<L>(
        &self,
        name: impl Into<String>,
        cache_bytes: u64,
        loader: L,
    ) -> Arc<CacheGroup>
    where
        L: Loader + 'static,
    {
        self.insert(name.into(), cache_bytes, Arc::new(loader))
    }

    /// Start building a group; the loader is checked when it is created
    pub fn group(&self, name: impl Into<String>) -> GroupBuilder<'_> {
        GroupBuilder {
            registry: self,
            name: name.into(),
            cache_bytes: self.settings.default_cache_bytes,
            loader: None,
        }
    }

    /// Look up a group by name
    pub fn get_group(&self, name: &str) -> Option<Arc<CacheGroup>> {
        self.groups.read().get(name).cloned()
    }

    /// Registered group names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.groups.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.read().is_empty()
    }

    fn insert(&self, name: String, cache_bytes: u64, loader: Arc<dyn Loader>) -> Arc<CacheGroup> {
        let group = Arc::new(CacheGroup::new(name.clone(), cache_bytes, loader));
        let replaced = self.groups.write().insert(name, Arc::clone(&group));
        if replaced.is_some() {
            warn!(group = group.name(), "replaced existing cache group");
        }
        info!(group = group.name(), cache_bytes, "created cache group");
        group
    }
}

/// Builder for a [`CacheGroup`] registered in a [`GroupRegistry`]
pub struct GroupBuilder<'a> {
    registry: &'a GroupRegistry,
    name: String,
    cache_bytes: u64,
    loader: Option<Arc<dyn Loader>>,
}

impl GroupBuilder<'_> {
    /// Byte budget for the group's cache (zero for unbounded)
    #[must_use]
    pub fn cache_bytes(mut self, cache_bytes: u64) -> Self {
        self.cache_bytes = cache_bytes;
        self
    }

    #[must_use]
    pub fn loader<L: Loader + 'static>(mut self, loader: L) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Use an already shared loader
    #[must_use]
    pub fn shared_loader(mut self, loader: Arc<dyn Loader>) -> Self {
        self.loader = Some(loader);
        self
    }

    #[must_use]
    pub fn loader_fn<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.loader(LoaderFn::new(f))
    }

    /// Register the group. Fails if no loader was supplied.
    pub fn create(self) -> Result<Arc<CacheGroup>> {
        let Some(loader) = self.loader else {
            error!(group = %self.name, "cache group created without a loader");
            return Err(Error::configuration(format!(
                "cache group '{}' requires a loader",
                self.name
            )));
        };
        Ok(self.registry.insert(self.name, self.cache_bytes, loader))
    }
}
