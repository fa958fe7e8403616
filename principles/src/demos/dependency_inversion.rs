//! Dependency inversion: the payment service only knows the processor port.

use std::sync::Arc;

use crate::adapters::{PayPalProcessor, SquareProcessor, StripeProcessor};
use crate::app::PaymentService;
use crate::domain::ports::Logger;
use crate::error::DomainError;

pub fn run(log: Arc<dyn Logger>) {
    PaymentService::new(Arc::new(PayPalProcessor), log.clone()).make_payment(100);
    PaymentService::new(Arc::new(StripeProcessor), log.clone()).make_payment(200);
    PaymentService::new(Arc::new(SquareProcessor), log.clone()).make_payment(300);

    // Any closure with the processor's shape can be injected
    let faulty = |_amount: u64, _log: &dyn Logger| -> Result<(), DomainError> {
        Err(DomainError::simulated("Simulated error"))
    };
    PaymentService::new(Arc::new(faulty), log).make_payment(400);
}
