use tracing::info;

use orderdesk_core::Money;
use orderdesk_invoicing::{PaymentMethod, PaymentResult};

/// Gateway stand-in: clears every payment for exactly the requested amount.
///
/// A real implementation would talk to a payment provider here; this one
/// exists so the payment seam can be exercised end to end.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCreditCardPayment;

impl MockCreditCardPayment {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentMethod for MockCreditCardPayment {
    fn process_payment(&self, amount: &Money) -> PaymentResult {
        info!(%amount, method = self.name(), "processing payment");
        PaymentResult::successful(amount.clone())
    }

    fn name(&self) -> &str {
        "Credit Card"
    }
}
