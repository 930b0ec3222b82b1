//! Diagnostic logging. Off in normal runs; `RUST_LOG=debug` shows per-input
//! detail on stderr.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. Safe to call more than once; only the
/// first call has an effect.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
