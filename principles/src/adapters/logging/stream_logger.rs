//! Stream logger
//!
//! Writes one line per message: info to one writer, errors to another.
//! Every line is flushed immediately and write failures are dropped, since
//! the `Logger` port must never fail.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::config::LogFormat;
use crate::domain::entities::{LogMessage, Severity};
use crate::domain::ports::Logger;

type Sink = Mutex<Box<dyn Write + Send>>;

pub struct StreamLogger {
    info: Sink,
    error: Sink,
    format: LogFormat,
}

impl StreamLogger {
    pub fn new(
        info: impl Write + Send + 'static,
        error: impl Write + Send + 'static,
        format: LogFormat,
    ) -> Self {
        Self {
            info: Mutex::new(Box::new(info)),
            error: Mutex::new(Box::new(error)),
            format,
        }
    }

    /// Info lines to stdout, error lines to stderr
    pub fn stdio(format: LogFormat) -> Self {
        Self::new(io::stdout(), io::stderr(), format)
    }

    fn render(&self, message: &LogMessage) -> String {
        match self.format {
            LogFormat::Plain => message.message.clone(),
            LogFormat::Json => serde_json::to_string(message).unwrap_or_else(|e| {
                ::tracing::warn!(error = %e, "Failed to encode log message as JSON");
                message.message.clone()
            }),
        }
    }
}

impl Logger for StreamLogger {
    fn emit(&self, message: LogMessage) {
        let line = self.render(&message);
        let sink = match message.severity {
            Severity::Info => &self.info,
            Severity::Error => &self.error,
        };

        // A writer that panicked mid-line leaves the lock poisoned; keep writing anyway
        let mut writer = sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            ::tracing::debug!(error = %e, "Dropped log line");
        }
    }
}
