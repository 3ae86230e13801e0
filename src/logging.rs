use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Picks the log filter: an explicit directive wins, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. An unparsable explicit directive falls back as well.
pub fn make_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the invoice table.
pub fn init(directive: Option<&str>) {
    // A subscriber may already be installed (tests, embedding); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(directive))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
