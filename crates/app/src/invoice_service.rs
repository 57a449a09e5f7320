use tracing::{info, warn};

use orderdesk_core::{DomainError, DomainResult, Money};
use orderdesk_infra::MockCreditCardPayment;
use orderdesk_invoicing::PaymentMethod;
use orderdesk_sales::Order;

/// Invoicing use cases: issue invoices for orders and settle them through
/// the configured payment method.
pub struct InvoiceService {
    payment_method: Box<dyn PaymentMethod>,
}

impl InvoiceService {
    pub fn new(payment_method: Box<dyn PaymentMethod>) -> Self {
        Self { payment_method }
    }

    /// Wires in the mock credit card gateway.
    pub fn with_mock_gateway() -> Self {
        Self::new(Box::new(MockCreditCardPayment::new()))
    }

    /// Issues a fresh invoice for the order's current total and returns the
    /// invoiced amount. Any previously active invoice is cancelled.
    pub fn issue_invoice_for_order(&self, order: &mut Order) -> DomainResult<Money> {
        let invoice = order.issue_invoice()?;
        let amount = invoice.amount().clone();
        info!(%amount, "invoice issued");
        Ok(amount)
    }

    /// Settles the invoice at `index` in the order's invoice list.
    pub fn pay_invoice(&self, order: &mut Order, index: usize) -> DomainResult<()> {
        match order.pay_invoice(index, self.payment_method.as_ref()) {
            Ok(()) => {
                info!(invoice = index, method = self.payment_method.name(), "invoice paid");
                Ok(())
            }
            Err(err) => {
                warn!(invoice = index, %err, "payment attempt failed");
                Err(err)
            }
        }
    }

    /// Settles the most recently issued invoice.
    pub fn pay_latest_invoice(&self, order: &mut Order) -> DomainResult<()> {
        let index = order
            .invoices()
            .len()
            .checked_sub(1)
            .ok_or(DomainError::InvoiceNotFound(0))?;
        self.pay_invoice(order, index)
    }
}
