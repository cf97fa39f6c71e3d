//! Logging init: tracing to stderr with env-filter override.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. `RUST_LOG` overrides the
/// default filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,getty_scraper=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
