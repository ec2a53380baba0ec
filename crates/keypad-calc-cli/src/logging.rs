//! Log subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the log filter: `RUST_LOG` when set, otherwise the verbosity default
#[must_use]
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs a compact stderr subscriber
///
/// Logs go to stderr so stdout carries only the display. Calling this twice
/// is harmless: the second install is ignored.
pub fn init_tracing(verbosity: Verbosity) {
    let installed = fmt()
        .compact()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
