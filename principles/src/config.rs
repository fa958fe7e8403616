use std::env;

use crate::adapters::TracingLogger;
use crate::error::ConfigError;

/// Where demo log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSink {
    /// Info lines to stdout, error lines to stderr
    #[default]
    Stream,
    /// Forward to the tracing subscriber
    Tracing,
}

impl std::str::FromStr for LogSink {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stream" => Ok(LogSink::Stream),
            "tracing" => Ok(LogSink::Tracing),
            _ => Err(ConfigError::InvalidValue {
                key: "SHOWCASE_LOG_SINK",
                value: s.to_string(),
                expected: "stream, tracing",
            }),
        }
    }
}

/// How stream lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "SHOWCASE_LOG_FORMAT",
                value: s.to_string(),
                expected: "plain, json",
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_sink: LogSink,
    pub log_format: LogFormat,
    /// Filter directive for the tracing subscriber
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_sink = match lookup("SHOWCASE_LOG_SINK") {
            Some(value) => value.parse()?,
            None => LogSink::default(),
        };
        let log_format = match lookup("SHOWCASE_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        let log_filter = match (log_sink, lookup("RUST_LOG")) {
            (LogSink::Stream, filter) => filter.unwrap_or_else(|| "warn".to_string()),
            (LogSink::Tracing, None) => "info".to_string(),
            // Demo lines are info events on the showcase target; never filter them out
            (LogSink::Tracing, Some(filter)) => {
                format!("{},{}=info", filter, TracingLogger::TARGET)
            }
        };

        Ok(Self {
            log_sink,
            log_format,
            log_filter,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_sink: LogSink::default(),
            log_format: LogFormat::default(),
            log_filter: "warn".to_string(),
        }
    }
}
