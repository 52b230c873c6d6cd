//! Tracing subscriber setup for the command-line front end.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the filter from `RUST_LOG`, falling back to `default_filter`.
#[must_use]
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Installs the global subscriber: env filter plus a formatting layer on stderr.
///
/// # Errors
/// Returns error if a global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
