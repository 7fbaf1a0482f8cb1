//! Logging setup
//!
//! `RUST_LOG` directives win; with none set only warnings are shown.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build a filter from `RUST_LOG`-style directives, WARN when empty
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Install the global fmt subscriber using `RUST_LOG`
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directives))
        .init();
}
