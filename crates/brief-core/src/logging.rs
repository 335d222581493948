//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Filter comes from BRIEF_LOG (default "info"); output goes to stderr so
/// rendered briefs on stdout stay pipeable. Safe to call once per process.
pub fn init() {
    let filter = EnvFilter::try_from_env("BRIEF_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
