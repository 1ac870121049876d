//! Logging bootstrap
//!
//! stdout belongs to the host protocol, so logs always go to stderr.
//! Verbosity follows `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, failing if one is already set
pub fn try_init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .with_ansi(false)
        .try_init()
}

/// Install the global subscriber; a no-op if one is already set
pub fn init_logging() {
    let _ = try_init_logging();
}
