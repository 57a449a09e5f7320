use serde::{Deserialize, Serialize};

use orderdesk_core::{Money, ValueObject};

/// Capability boundary for executing a payment.
///
/// The invoice only ever sees this trait; concrete gateway adapters and test
/// doubles are interchangeable behind it. This is the system's one seam for
/// substituting real payment processors.
pub trait PaymentMethod {
    /// Attempts to clear `amount` and reports the outcome.
    ///
    /// Treated as atomic by the caller: it either clears or it doesn't, and
    /// it never mutates domain state.
    fn process_payment(&self, amount: &Money) -> PaymentResult;

    /// Human-readable method name (e.g. "Credit Card").
    fn name(&self) -> &str;
}

/// Outcome of a payment attempt.
///
/// Carries the amount the payment actually cleared for, which the invoice
/// checks against its own frozen amount even on reported success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    successful: bool,
    amount: Money,
    error_message: Option<String>,
}

impl PaymentResult {
    pub fn successful(amount: Money) -> Self {
        Self {
            successful: true,
            amount,
            error_message: None,
        }
    }

    pub fn failed(amount: Money, error_message: impl Into<String>) -> Self {
        Self {
            successful: false,
            amount,
            error_message: Some(error_message.into()),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

impl ValueObject for PaymentResult {}
