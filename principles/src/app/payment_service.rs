//! Payment service
//!
//! Depends on the `PaymentProcessor` port only; the concrete gateway is
//! injected. Processor failures stop here and become one error line.

use std::sync::Arc;

use crate::domain::ports::{Logger, PaymentProcessor};
use crate::error::DomainError;

/// Result of a payment attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Processed,
    Failed(DomainError),
}

impl PaymentOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, PaymentOutcome::Processed)
    }
}

/// Service for charging payments through an injected processor
pub struct PaymentService<P>
where
    P: PaymentProcessor,
{
    processor: Arc<P>,
    log: Arc<dyn Logger>,
}

impl<P> PaymentService<P>
where
    P: PaymentProcessor,
{
    pub fn new(processor: Arc<P>, log: Arc<dyn Logger>) -> Self {
        Self { processor, log }
    }

    /// Charge `amount`; never propagates a processor failure
    pub fn make_payment(&self, amount: u64) -> PaymentOutcome {
        tracing::debug!(amount, "Dispatching payment");

        match self.processor.process_payment(amount, self.log.as_ref()) {
            Ok(()) => PaymentOutcome::Processed,
            Err(e) => {
                self.log.error(&format!(
                    "Failed to process payment of ${}: {}",
                    amount, e
                ));
                PaymentOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PayPalProcessor;
    use crate::test_utils::{CapturingLogger, FailingProcessor, RecordingProcessor};

    #[test]
    fn successful_payment_logs_processor_line_only() {
        let log = Arc::new(CapturingLogger::new());
        let service = PaymentService::new(Arc::new(PayPalProcessor), log.clone());

        let outcome = service.make_payment(100);

        assert!(outcome.is_processed());
        assert_eq!(log.infos(), vec!["Processing $100 payment through PayPal."]);
        assert!(log.errors().is_empty());
    }

    #[test]
    fn processor_receives_amount() {
        let log = Arc::new(CapturingLogger::new());
        let processor = Arc::new(RecordingProcessor::new());
        let service = PaymentService::new(processor.clone(), log.clone());

        service.make_payment(5);
        service.make_payment(7);

        assert_eq!(processor.amounts(), vec![5, 7]);
    }

    #[test]
    fn failure_is_logged_once_and_not_raised() {
        let log = Arc::new(CapturingLogger::new());
        let processor = Arc::new(FailingProcessor::new("Simulated error"));
        let service = PaymentService::new(processor.clone(), log.clone());

        let outcome = service.make_payment(400);

        assert_eq!(
            outcome,
            PaymentOutcome::Failed(DomainError::simulated("Simulated error"))
        );
        assert_eq!(processor.attempts(), 1);

        let errors = log.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("400"));
        assert!(errors[0].contains("Simulated error"));
        assert!(log.infos().is_empty());
    }

    #[test]
    fn no_retry_after_failure() {
        let log = Arc::new(CapturingLogger::new());
        let processor = Arc::new(FailingProcessor::new("declined"));
        let service = PaymentService::new(processor.clone(), log.clone());

        service.make_payment(1);

        assert_eq!(processor.attempts(), 1);
    }
}
