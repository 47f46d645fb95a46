//! Diagnostic logging setup.
//!
//! Game output goes to stdout; diagnostics go to stderr through a
//! `tracing-subscriber` fmt layer filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs the global subscriber. With `RUST_LOG` unset the level is `warn`,
/// or `debug` when `verbose` is set. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
