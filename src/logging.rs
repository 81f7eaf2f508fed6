//! Diagnostic logging to stderr
//!
//! stdout carries the prompt/response protocol, so log events always go to
//! stderr. `RECIPEBOOK_LOG` takes an `EnvFilter` directive and wins over `-v`.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "RECIPEBOOK_LOG";

/// Filter level for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialized");
    }
}
