//! Tracing subscriber setup

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when RUST_LOG is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install a stderr subscriber filtered by RUST_LOG.
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();
}
