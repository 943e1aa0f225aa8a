//! Byte-bounded LRU caching for loadcache
//!
//! This crate provides the eviction engine used by cache groups:
//! - `LruCache`: recency order (backed by the `lru` crate), byte budget and
//!   least-recently-used eviction
//! - `ConcurrentCache`: a mutex-guarded, lazily created `LruCache`

pub mod concurrent;
pub mod lru;

pub use concurrent::ConcurrentCache;
pub use self::lru::{LruCache, OnEvicted};
