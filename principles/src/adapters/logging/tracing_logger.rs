//! Tracing-backed logger
//!
//! Forwards demo lines to whatever subscriber the binary installed.

use crate::domain::entities::{LogMessage, Severity};
use crate::domain::ports::Logger;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Target every forwarded line is emitted under
    pub const TARGET: &'static str = "showcase";

    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn emit(&self, message: LogMessage) {
        match message.severity {
            Severity::Info => ::tracing::info!(target: TracingLogger::TARGET, "{}", message.message),
            Severity::Error => ::tracing::error!(target: TracingLogger::TARGET, "{}", message.message),
        }
    }
}
