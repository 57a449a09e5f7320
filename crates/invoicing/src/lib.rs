//! Invoicing domain: the invoice lifecycle and the payment capability
//! boundary it settles through.

pub mod invoice;
pub mod payment;

pub use invoice::{Invoice, InvoiceStatus};
pub use payment::{PaymentMethod, PaymentResult};
