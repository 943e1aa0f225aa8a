//! In-memory data source backing the demo group

use anyhow::{anyhow, bail, Result};
use loadcache_group::Loader;
use std::collections::HashMap;
use tracing::info;

/// Rows given on the command line as `key=value`
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: HashMap<String, String>,
}

impl MemorySource {
    /// Parse `key=value` pairs; later pairs override earlier ones
    pub fn parse<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = HashMap::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, value)) = pair.split_once('=') else {
                bail!("source row '{pair}' is not of the form key=value");
            };
            if key.is_empty() {
                bail!("source row '{pair}' has an empty key");
            }
            rows.insert(key.to_string(), value.to_string());
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl Loader for MemorySource {
    fn fetch(&self, key: &str) -> Result<Vec<u8>> {
        info!(key, "slow source lookup");
        self.rows
            .get(key)
            .map(|value| value.clone().into_bytes())
            .ok_or_else(|| anyhow!("{key} not exist"))
    }
}
