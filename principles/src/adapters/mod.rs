//! Adapters layer
//!
//! Implementations of port traits: logger sinks and payment gateways.

pub mod logging;
pub mod payments;

use std::sync::Arc;

use crate::config::{Config, LogSink};
use crate::domain::ports::Logger;

pub use logging::{StreamLogger, TracingLogger};
pub use payments::{PayPalProcessor, SquareProcessor, StripeProcessor};

/// Build the logger selected by configuration
pub fn logger_from_config(config: &Config) -> Arc<dyn Logger> {
    match config.log_sink {
        LogSink::Stream => Arc::new(StreamLogger::stdio(config.log_format)),
        LogSink::Tracing => Arc::new(TracingLogger::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;
    use crate::test_utils::SharedBuffer;

    fn tracing_config(rust_log: &str) -> Config {
        Config::from_lookup(|key| match key {
            "SHOWCASE_LOG_SINK" => Some("tracing".to_string()),
            "RUST_LOG" => Some(rust_log.to_string()),
            _ => None,
        })
        .unwrap()
    }

    /// Run `f` under a subscriber built from `config`, returning what it wrote
    fn captured(config: &Config, f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(logging::env_filter(config))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        ::tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn tracing_sink_survives_restrictive_filter() {
        let config = tracing_config("warn");
        let log = logger_from_config(&config);

        let output = captured(&config, || {
            log.info("visible?");
            log.error("also visible");
        });

        assert!(output.contains("visible?"), "missing info line in: {}", output);
        assert!(output.contains("also visible"));
    }

    #[test]
    fn tracing_sink_survives_crate_scoped_filter() {
        let config = tracing_config("solid_principles=debug");
        let log = logger_from_config(&config);

        let output = captured(&config, || log.info("Duck:"));

        assert!(output.contains("Duck:"));
    }

    #[test]
    fn stream_sink_does_not_go_through_tracing() {
        let config = Config::default();
        let log = logger_from_config(&config);

        let output = captured(&tracing_config("trace"), || log.info(""));

        assert!(!output.contains("showcase"));
    }
}
