//! Tracing subscriber setup for binaries.

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, or `default_level` when unset.
///
/// Calling this twice is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Failed to create tracing filter")?;

    // stdout is reserved for tool output
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    if let Err(err) = result {
        tracing::debug!("Tracing already initialized: {}", err);
    }

    Ok(())
}
