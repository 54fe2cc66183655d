//! Logging initialization.
//!
//! Installs a `tracing` subscriber with an environment-driven filter.
//! `RUST_LOG` takes precedence over the verbosity flag, so individual
//! targets can be tuned without code changes.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Must be called at most once, early in program startup.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
