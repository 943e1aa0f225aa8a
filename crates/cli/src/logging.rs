//! Tracing subscriber setup for the binary

use loadcache_core::LOADCACHE_LOG_VAR;
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global fmt subscriber.
///
/// `LOADCACHE_LOG` takes precedence over `level` when set, and accepts the
/// usual `EnvFilter` directives (e.g. `loadcache_group=debug`).
pub fn init(level: Level) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOADCACHE_LOG_VAR)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init()?;
    Ok(())
}
