//! Logging setup for applications embedding the crate

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` when `verbose`, else `info`.
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .try_init()
        .is_ok()
}
