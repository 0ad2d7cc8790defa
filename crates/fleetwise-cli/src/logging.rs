//! Tracing subscriber setup
//!
//! Logs go to stderr; stdout carries only report output.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` applies unless `verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second install (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
