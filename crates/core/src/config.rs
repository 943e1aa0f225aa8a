//! Cache settings resolved from defaults and the process environment

use crate::constants::{DEFAULT_CACHE_BYTES, LOADCACHE_CACHE_BYTES_VAR};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Settings shared by every group created through one registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Byte budget for groups created without an explicit one.
    /// Zero means unbounded.
    pub default_cache_bytes: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_cache_bytes: DEFAULT_CACHE_BYTES,
        }
    }
}

impl CacheSettings {
    /// Defaults overridden by `LOADCACHE_CACHE_BYTES` when it is set
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();
        if let Ok(raw) = env::var(LOADCACHE_CACHE_BYTES_VAR) {
            settings.default_cache_bytes = parse_cache_bytes(&raw)?;
            tracing::debug!(
                default_cache_bytes = settings.default_cache_bytes,
                "cache budget taken from {}",
                LOADCACHE_CACHE_BYTES_VAR
            );
        }
        Ok(settings)
    }

    /// Set the default byte budget
    #[must_use]
    pub fn with_default_cache_bytes(mut self, bytes: u64) -> Self {
        self.default_cache_bytes = bytes;
        self
    }
}

fn parse_cache_bytes(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|e| {
        Error::configuration(format!(
            "{LOADCACHE_CACHE_BYTES_VAR} must be a non-negative byte count, got '{raw}': {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_without_override_uses_default() {
        env::remove_var(LOADCACHE_CACHE_BYTES_VAR);
        let settings = CacheSettings::from_env().unwrap();
        assert_eq!(settings.default_cache_bytes, DEFAULT_CACHE_BYTES);
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        env::set_var(LOADCACHE_CACHE_BYTES_VAR, " 2048 ");
        let settings = CacheSettings::from_env();
        env::remove_var(LOADCACHE_CACHE_BYTES_VAR);
        assert_eq!(settings.unwrap().default_cache_bytes, 2048);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        env::set_var(LOADCACHE_CACHE_BYTES_VAR, "lots");
        let result = CacheSettings::from_env();
        env::remove_var(LOADCACHE_CACHE_BYTES_VAR);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let settings: CacheSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CacheSettings::default());

        let settings: CacheSettings =
            serde_json::from_str(r#"{"default_cache_bytes": 0}"#).unwrap();
        assert_eq!(settings.default_cache_bytes, 0);
    }
}
