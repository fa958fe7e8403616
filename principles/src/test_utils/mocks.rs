//! Mock implementations of port traits
//!
//! In-memory implementations that record what they were asked to do, so
//! tests can verify behavior through the same ports production code uses.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{LogMessage, Severity};
use crate::domain::ports::{Logger, PaymentProcessor};
use crate::error::DomainError;

// ============================================================================
// Capturing Logger
// ============================================================================

#[derive(Default, Clone)]
pub struct CapturingLogger {
    records: Arc<RwLock<Vec<LogMessage>>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message, in emission order
    pub fn records(&self) -> Vec<LogMessage> {
        self.records.read().unwrap().clone()
    }

    /// Every message text regardless of severity, in emission order
    pub fn lines(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.with_severity(Severity::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_severity(Severity::Error)
    }

    fn with_severity(&self, severity: Severity) -> Vec<String> {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.severity == severity)
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Logger for CapturingLogger {
    fn emit(&self, message: LogMessage) {
        self.records.write().unwrap().push(message);
    }
}

// ============================================================================
// Shared Buffer
// ============================================================================

/// Writer whose contents stay readable after being handed to a sink
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Payment Processors
// ============================================================================

/// Accepts every payment and remembers the amounts
#[derive(Default)]
pub struct RecordingProcessor {
    pub amounts: Arc<RwLock<Vec<u64>>>,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amounts(&self) -> Vec<u64> {
        self.amounts.read().unwrap().clone()
    }
}

impl PaymentProcessor for RecordingProcessor {
    fn process_payment(&self, amount: u64, log: &dyn Logger) -> Result<(), DomainError> {
        self.amounts.write().unwrap().push(amount);
        log.info(&format!("Recorded ${}", amount));
        Ok(())
    }
}

/// Rejects every payment with a fixed reason
pub struct FailingProcessor {
    reason: String,
    pub attempts: Arc<RwLock<u32>>,
}

impl FailingProcessor {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            attempts: Arc::new(RwLock::new(0)),
        }
    }

    pub fn attempts(&self) -> u32 {
        *self.attempts.read().unwrap()
    }
}

impl PaymentProcessor for FailingProcessor {
    fn process_payment(&self, _amount: u64, _log: &dyn Logger) -> Result<(), DomainError> {
        *self.attempts.write().unwrap() += 1;
        Err(DomainError::simulated(self.reason.clone()))
    }
}
