use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Money};

use crate::payment::PaymentMethod;

/// Invoice status lifecycle: `New -> Paid`, `New -> Cancelled`.
/// `Paid` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    New,
    Cancelled,
    Paid,
}

impl InvoiceStatus {
    pub fn can_be_paid(self) -> bool {
        matches!(self, InvoiceStatus::New)
    }

    pub fn can_be_cancelled(self) -> bool {
        matches!(self, InvoiceStatus::New)
    }

    pub fn is_paid(self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::New => "new",
            InvoiceStatus::Cancelled => "cancelled",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an order's total at issuance time, with its own payment
/// lifecycle.
///
/// The amount is frozen at creation and never recomputed, even if the order's
/// items were somehow to change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    status: InvoiceStatus,
    amount: Money,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a new invoice over an already-snapshotted order total.
    ///
    /// In normal operation invoices come out of `Order::issue_invoice`, which
    /// computes the snapshot; constructing one directly is a testing affair.
    pub fn issue(amount: Money) -> Self {
        Self {
            status: InvoiceStatus::New,
            amount,
            issued_at: Utc::now(),
        }
    }

    /// Settles the invoice through `method`.
    ///
    /// The check order is load-bearing: a payment that reports success but
    /// cleared the wrong amount must still be rejected, without transitioning
    /// status. On any failure the invoice is left exactly as it was.
    pub fn pay(&mut self, method: &dyn PaymentMethod) -> DomainResult<()> {
        if self.status.is_paid() {
            return Err(DomainError::InvoiceAlreadyPaid);
        }
        if !self.status.can_be_paid() {
            return Err(DomainError::InvoiceCannotBePaid {
                status: self.status.as_str().to_owned(),
            });
        }

        let result = method.process_payment(&self.amount);

        if !result.is_successful() {
            let reason = result.error_message().unwrap_or("Unknown payment error");
            return Err(DomainError::payment_failed(reason));
        }
        if result.amount() != &self.amount {
            return Err(DomainError::PaymentAmountMismatch {
                expected: self.amount.clone(),
                actual: result.amount().clone(),
            });
        }

        self.status = InvoiceStatus::Paid;
        Ok(())
    }

    /// Cancels the invoice. A silent no-op on anything but a `New` invoice;
    /// never fails.
    pub fn cancel(&mut self) {
        if !self.status.can_be_cancelled() {
            return;
        }
        self.status = InvoiceStatus::Cancelled;
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn is_new(&self) -> bool {
        matches!(self.status, InvoiceStatus::New)
    }

    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, InvoiceStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentResult;

    /// Configurable payment double: succeed or fail, optionally clearing a
    /// different amount than requested.
    struct MockPaymentMethod {
        succeed: bool,
        amount_override: Option<Money>,
        error_message: Option<String>,
    }

    impl MockPaymentMethod {
        fn succeeding() -> Self {
            Self {
                succeed: true,
                amount_override: None,
                error_message: None,
            }
        }

        fn clearing(amount: Money) -> Self {
            Self {
                succeed: true,
                amount_override: Some(amount),
                error_message: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                succeed: false,
                amount_override: None,
                error_message: Some(message.to_owned()),
            }
        }
    }

    impl PaymentMethod for MockPaymentMethod {
        fn process_payment(&self, amount: &Money) -> PaymentResult {
            let cleared = self.amount_override.clone().unwrap_or_else(|| amount.clone());
            if self.succeed {
                PaymentResult::successful(cleared)
            } else {
                let message = self.error_message.as_deref().unwrap_or("declined");
                PaymentResult::failed(cleared, message)
            }
        }

        fn name(&self) -> &str {
            "Mock Payment"
        }
    }

    fn invoice_over(amount: f64) -> Invoice {
        Invoice::issue(Money::from_decimal(amount).unwrap())
    }

    #[test]
    fn issued_invoice_starts_new_with_frozen_amount() {
        let invoice = invoice_over(999.99);

        assert_eq!(invoice.status(), InvoiceStatus::New);
        assert!(invoice.is_new());
        assert!(!invoice.is_paid());
        assert!(!invoice.is_cancelled());
        assert_eq!(invoice.amount(), &Money::from_decimal(999.99).unwrap());
    }

    #[test]
    fn pays_with_matching_amount() {
        let mut invoice = invoice_over(999.99);

        invoice.pay(&MockPaymentMethod::succeeding()).unwrap();

        assert!(invoice.is_paid());
    }

    #[test]
    fn cannot_pay_twice() {
        let mut invoice = invoice_over(999.99);
        invoice.pay(&MockPaymentMethod::succeeding()).unwrap();

        let err = invoice.pay(&MockPaymentMethod::succeeding()).unwrap_err();

        assert_eq!(err, DomainError::InvoiceAlreadyPaid);
        assert!(invoice.is_paid());
    }

    #[test]
    fn cannot_pay_cancelled_invoice() {
        let mut invoice = invoice_over(999.99);
        invoice.cancel();

        let err = invoice.pay(&MockPaymentMethod::succeeding()).unwrap_err();

        assert_eq!(
            err,
            DomainError::InvoiceCannotBePaid {
                status: "cancelled".to_owned()
            }
        );
        assert!(err.to_string().contains("cancelled"));
        assert!(invoice.is_cancelled());
    }

    #[test]
    fn reported_failure_propagates_reason_and_keeps_status() {
        let mut invoice = invoice_over(999.99);

        let err = invoice
            .pay(&MockPaymentMethod::failing("Insufficient funds"))
            .unwrap_err();

        assert_eq!(err, DomainError::PaymentFailed("Insufficient funds".into()));
        assert!(invoice.is_new());
    }

    #[test]
    fn amount_mismatch_rejects_even_on_reported_success() {
        let mut invoice = invoice_over(999.99);
        let wrong = Money::from_decimal(500.00).unwrap();

        let err = invoice
            .pay(&MockPaymentMethod::clearing(wrong.clone()))
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::PaymentAmountMismatch {
                expected: Money::from_decimal(999.99).unwrap(),
                actual: wrong,
            }
        );
        assert_eq!(
            err.to_string(),
            "payment amount mismatch, expected: 999.99 UAH, but received: 500.00 UAH"
        );
        // Rejected payments leave the invoice payable.
        assert!(invoice.is_new());
    }

    #[test]
    fn cancels_new_invoice() {
        let mut invoice = invoice_over(10.00);

        invoice.cancel();

        assert!(invoice.is_cancelled());
    }

    #[test]
    fn cancelling_paid_invoice_is_a_no_op() {
        let mut invoice = invoice_over(10.00);
        invoice.pay(&MockPaymentMethod::succeeding()).unwrap();

        invoice.cancel();

        assert!(invoice.is_paid());
    }

    #[test]
    fn cancelling_twice_is_a_no_op() {
        let mut invoice = invoice_over(10.00);
        invoice.cancel();
        invoice.cancel();

        assert!(invoice.is_cancelled());
    }
}
