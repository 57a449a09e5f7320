use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Money, Quantity};
use orderdesk_invoicing::{Invoice, PaymentMethod};
use orderdesk_products::Product;

use crate::item::OrderItem;

/// Order identifier, assigned by the order store (monotonic, starting at 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle: `New -> Invoiced -> Paid`, linear, no regression
/// through normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Invoiced,
    Paid,
}

impl OrderStatus {
    /// Items may only be appended while the order is new.
    pub fn allows_editing(self) -> bool {
        matches!(self, OrderStatus::New)
    }

    /// Whether issuing an invoice would be sensible in this status.
    ///
    /// NOTE: [`Order::issue_invoice`] deliberately does not consult this —
    /// re-invoicing a paid order is allowed and moves the order back to
    /// `Invoiced`, preserving the system's historical (permissive) behavior.
    /// See DESIGN.md.
    pub fn can_create_invoice(self) -> bool {
        !matches!(self, OrderStatus::Paid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Invoiced => "invoiced",
            OrderStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate root: every mutation of items and invoices flows through here.
///
/// The order owns its invoices outright. Payment completion therefore runs
/// through [`Order::pay_invoice`], which performs the "notify the order"
/// step itself once the invoice transition succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    status: OrderStatus,
    items: Vec<OrderItem>,
    invoices: Vec<Invoice>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an empty order in the `New` status.
    pub fn create() -> Self {
        Self {
            status: OrderStatus::New,
            items: Vec::new(),
            invoices: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a line item for `product`.
    ///
    /// Fails with `OrderNotEditable` once an invoice has been issued, and
    /// propagates quantity validation from the item. Either the item is
    /// appended whole or nothing changes.
    pub fn add_product(&mut self, product: &Product, quantity: Quantity) -> DomainResult<()> {
        if !self.status.allows_editing() {
            return Err(DomainError::OrderNotEditable {
                status: self.status.as_str().to_owned(),
            });
        }
        let item = OrderItem::create(product, quantity)?;
        self.items.push(item);
        Ok(())
    }

    /// Issues a new invoice over the current total.
    ///
    /// Any still-new invoice is cancelled first, so at most one invoice is
    /// payable at any time. Permissive on purpose: an order with zero items
    /// yields a zero-amount invoice.
    pub fn issue_invoice(&mut self) -> DomainResult<&Invoice> {
        self.cancel_active_invoices();

        let amount = self.calculate_total_amount()?;
        self.invoices.push(Invoice::issue(amount));
        self.status = OrderStatus::Invoiced;

        let last = self.invoices.len() - 1;
        Ok(&self.invoices[last])
    }

    /// Pays the invoice at `index` through `method`.
    ///
    /// The order transitions to `Paid` only after the invoice's own
    /// transition succeeded; a rejected payment leaves both untouched.
    pub fn pay_invoice(&mut self, index: usize, method: &dyn PaymentMethod) -> DomainResult<()> {
        let invoice = self
            .invoices
            .get_mut(index)
            .ok_or(DomainError::InvoiceNotFound(index))?;
        invoice.pay(method)?;
        self.mark_as_paid();
        Ok(())
    }

    /// Unconditional transition to `Paid`.
    ///
    /// Part of the payment completion flow; external callers go through
    /// [`Order::pay_invoice`] instead.
    pub fn mark_as_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }

    /// Sum of all cached line totals; zero money for an empty order.
    pub fn calculate_total_amount(&self) -> DomainResult<Money> {
        let mut total = Money::zero();
        for item in &self.items {
            total = total.add(item.total_price())?;
        }
        Ok(total)
    }

    /// Refreshes cached line totals for `product` after a catalog price
    /// change. Items for other products are left alone.
    pub fn recalculate_item_prices(&mut self, product: &Product) -> DomainResult<()> {
        for item in &mut self.items {
            if item.product().name() == product.name() {
                item.recalculate_price(product)?;
            }
        }
        Ok(())
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn cancel_active_invoices(&mut self) {
        // By construction at most one invoice can be New here, but cancel is
        // a no-op on the rest either way.
        for invoice in &mut self.invoices {
            invoice.cancel();
        }
    }
}
