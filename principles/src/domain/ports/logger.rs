//! Logger port trait
//!
//! The sink every variant and service reports through. It is always injected,
//! so tests can substitute a capturing implementation.

use crate::domain::entities::LogMessage;

/// Port trait for human-readable output
///
/// Implementations must never fail and must preserve call order.
pub trait Logger: Send + Sync {
    /// Write a single message
    fn emit(&self, message: LogMessage);

    /// Write an info-level line
    fn info(&self, message: &str) {
        self.emit(LogMessage::info(message));
    }

    /// Write an error-level line
    fn error(&self, message: &str) {
        self.emit(LogMessage::error(message));
    }
}
