//! Load-through cache groups for loadcache
//!
//! A [`CacheGroup`] is a named cache namespace. Reads that miss the cache
//! are answered by the group's [`Loader`], and the result is cached for
//! subsequent reads. Groups are created and resolved through a caller-owned
//! [`GroupRegistry`].

pub mod group;
pub mod loader;
pub mod registry;

pub use group::CacheGroup;
pub use loader::{loader_fn, Loader, LoaderFn};
pub use registry::{GroupBuilder, GroupRegistry};

pub use loadcache_core::{ByteView, CacheSettings, Error, Result};
