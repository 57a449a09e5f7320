//! Application services: the use-case layer that wires repositories, domain
//! aggregates and the payment gateway together. Callers hand in raw input
//! (strings, floats, ids); services parse it into domain types and delegate.

pub mod dto;
pub mod invoice_service;
pub mod order_service;
pub mod product_service;

pub use dto::{AddProductToOrderRequest, CreateProductRequest};
pub use invoice_service::InvoiceService;
pub use order_service::OrderService;
pub use product_service::ProductService;
