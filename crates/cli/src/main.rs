//! Resolve keys through a load-through cache group backed by rows given on
//! the command line.

use anyhow::Result;
use clap::Parser;
use loadcache_core::CacheSettings;
use loadcache_group::GroupRegistry;
use tracing::{info, Level};

mod logging;
mod source;

use source::MemorySource;

#[derive(Parser, Debug)]
#[command(name = "loadcache")]
#[command(about = "Read keys through a byte-bounded load-through cache", long_about = None)]
#[command(version)]
struct Cli {
    /// Name of the cache group
    #[arg(long, default_value = "scores")]
    group: String,

    /// Byte budget for the group (0 for unbounded); defaults to LOADCACHE_CACHE_BYTES
    #[arg(long)]
    cache_bytes: Option<u64>,

    /// Source rows as key=value, repeatable
    #[arg(short, long = "source", value_name = "KEY=VALUE")]
    sources: Vec<String>,

    /// How many times to resolve the key list
    #[arg(long, default_value_t = 2)]
    rounds: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Keys to resolve
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    let settings = CacheSettings::from_env()?;
    let registry = GroupRegistry::with_settings(settings);
    let source = MemorySource::parse(&cli.sources)?;
    info!(rows = source.len(), "source ready");

    let mut builder = registry.group(cli.group.as_str()).loader(source);
    if let Some(cache_bytes) = cli.cache_bytes {
        builder = builder.cache_bytes(cache_bytes);
    }
    builder.create()?;

    let group = registry
        .get_group(&cli.group)
        .ok_or_else(|| anyhow::anyhow!("group '{}' was not registered", cli.group))?;

    for round in 1..=cli.rounds {
        info!(round, "resolving keys");
        for key in &cli.keys {
            match group.get(key) {
                Ok(value) => println!("{key}={value}"),
                Err(e) => println!("{key}: {e}"),
            }
        }
    }

    info!(
        entries = group.cached_entries(),
        bytes = group.cached_bytes(),
        "done"
    );
    Ok(())
}
