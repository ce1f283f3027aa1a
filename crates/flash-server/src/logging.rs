//! Log output for the flash binaries.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG` (e.g. `RUST_LOG=flash_server=debug` logs every
/// request). Calling this twice keeps the first subscriber.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
