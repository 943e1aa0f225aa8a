/// Constants used throughout the loadcache crates

// Environment variable names
pub const LOADCACHE_CACHE_BYTES_VAR: &str = "LOADCACHE_CACHE_BYTES";
pub const LOADCACHE_LOG_VAR: &str = "LOADCACHE_LOG";

// Default byte budget for a group created without an explicit one (64 MiB)
pub const DEFAULT_CACHE_BYTES: u64 = 64 * 1024 * 1024;

// A byte budget of zero disables eviction entirely
pub const UNBOUNDED_CACHE_BYTES: u64 = 0;
