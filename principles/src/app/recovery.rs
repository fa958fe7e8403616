//! Caller-side recovery
//!
//! Dispatchers propagate `DomainError`; callers that want to keep going use
//! this to turn a failure into a single error line.

use crate::domain::ports::Logger;
use crate::error::DomainError;

/// Log `result`'s error (if any) once at error severity and carry on
pub fn log_and_continue<T>(log: &dyn Logger, result: Result<T, DomainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log.error(&e.to_string());
            None
        }
    }
}
