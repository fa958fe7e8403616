//! Diagnostics setup
//!
//! Installs the tracing subscriber. It writes to stderr so that stdout only
//! carries demo lines from the stream logger.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// The configured filter, or `warn` when the directive does not parse
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init(config: &Config) {
    // A second init (e.g. two demos in one process) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = EnvFilter::try_new(&config.log_filter) {
        tracing::warn!(filter = %config.log_filter, error = %e, "Ignoring invalid log filter");
    }
}
