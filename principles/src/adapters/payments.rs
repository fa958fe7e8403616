//! Payment gateway adapters
//!
//! Simulated gateways implementing the `PaymentProcessor` port. None of them
//! talk to a real service; each reports the charge through the logger.

use crate::domain::ports::{Logger, PaymentProcessor};
use crate::error::DomainError;

fn processing_line(amount: u64, gateway: &str) -> String {
    format!("Processing ${} payment through {}.", amount, gateway)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self, amount: u64, log: &dyn Logger) -> Result<(), DomainError> {
        log.info(&processing_line(amount, "PayPal"));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripeProcessor;

impl PaymentProcessor for StripeProcessor {
    fn process_payment(&self, amount: u64, log: &dyn Logger) -> Result<(), DomainError> {
        log.info(&processing_line(amount, "Stripe"));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SquareProcessor;

impl PaymentProcessor for SquareProcessor {
    fn process_payment(&self, amount: u64, log: &dyn Logger) -> Result<(), DomainError> {
        log.info(&processing_line(amount, "Square"));
        Ok(())
    }
}
