//! Domain error model.

use thiserror::Error;

use crate::money::Money;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic, recoverable business failure. Operations
/// that return one of these leave aggregate state untouched; there is no
/// partial mutation to roll back.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Money construction rejected a negative amount.
    #[error("money amount cannot be negative")]
    InvalidAmount,

    /// Money arithmetic left the representable minor-unit range.
    #[error("money amount is not representable in minor units")]
    AmountOverflow,

    /// Money multiplication rejected a negative multiplier.
    #[error("multiplier cannot be negative")]
    InvalidMultiplier,

    /// Quantity construction rejected a zero, negative or non-finite value.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// Product name failed validation (empty or too long).
    #[error("invalid product name: {0}")]
    InvalidProductName(String),

    /// Product type string did not parse.
    #[error("unknown product type \"{0}\"")]
    InvalidProductType(String),

    /// A valid quantity conflicts with the product's type rule.
    #[error("{product_type} products require integer quantities, got {quantity:.2}")]
    IncompatibleQuantityForType { product_type: String, quantity: f64 },

    /// Items may only be appended while the order is new.
    #[error("order cannot be edited when status is \"{status}\"; only orders with status \"new\" can be edited")]
    OrderNotEditable { status: String },

    /// Paying a paid invoice a second time.
    #[error("invoice has already been paid and cannot be paid again")]
    InvoiceAlreadyPaid,

    /// Paying an invoice outside the payable state (i.e. cancelled).
    #[error("invoice with status \"{status}\" cannot be paid; only invoices with status \"new\" can be paid")]
    InvoiceCannotBePaid { status: String },

    /// The order has no invoice at the addressed position.
    #[error("order has no invoice at position {0}")]
    InvoiceNotFound(usize),

    /// The payment method reported a failure.
    #[error("payment failed: {0}")]
    PaymentFailed(String),

    /// The payment cleared for a different amount than the invoice total.
    #[error("payment amount mismatch, expected: {expected}, but received: {actual}")]
    PaymentAmountMismatch { expected: Money, actual: Money },

    /// Catalog-level name uniqueness violation.
    #[error("product with name \"{0}\" already exists")]
    DuplicateProductName(String),

    #[error("product \"{0}\" not found")]
    ProductNotFound(String),

    #[error("order with id {0} not found")]
    OrderNotFound(u64),

    /// Request-level (DTO) validation failure.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl DomainError {
    pub fn invalid_product_name(msg: impl Into<String>) -> Self {
        Self::InvalidProductName(msg.into())
    }

    pub fn payment_failed(reason: impl Into<String>) -> Self {
        Self::PaymentFailed(reason.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}
