//! Payment processor port trait
//!
//! High-level payment code depends on this abstraction only. Gateways live in
//! `adapters::payments`; any closure with the same shape works too.

use crate::domain::ports::Logger;
use crate::error::DomainError;

pub trait PaymentProcessor: Send + Sync {
    /// Charge `amount` whole dollars
    fn process_payment(&self, amount: u64, log: &dyn Logger) -> Result<(), DomainError>;
}

impl<F> PaymentProcessor for F
where
    F: Fn(u64, &dyn Logger) -> Result<(), DomainError> + Send + Sync,
{
    fn process_payment(&self, amount: u64, log: &dyn Logger) -> Result<(), DomainError> {
        self(amount, log)
    }
}
