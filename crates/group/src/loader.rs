//! Sources consulted when a cache group misses

use std::fmt;
use std::sync::Arc;

/// External data source behind a cache group.
///
/// `fetch` may be called concurrently, including for the same key: groups do
/// not collapse duplicate in-flight loads, so implementations must be free of
/// side effects the cache would care about.
pub trait Loader: Send + Sync {
    /// Produce the bytes for `key`, or explain why they are unavailable
    fn fetch(&self, key: &str) -> anyhow::Result<Vec<u8>>;
}

/// A [`Loader`] backed by a closure
pub struct LoaderFn<F> {
    f: F,
}

impl<F> LoaderFn<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Loader for LoaderFn<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    fn fetch(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (self.f)(key)
    }
}

impl<F> fmt::Debug for LoaderFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoaderFn")
    }
}

/// Wrap a closure as a [`Loader`]
pub fn loader_fn<F>(f: F) -> LoaderFn<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    LoaderFn::new(f)
}

impl<L: Loader + ?Sized> Loader for Arc<L> {
    fn fetch(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (**self).fetch(key)
    }
}
