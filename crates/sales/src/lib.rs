//! Sales domain: the order aggregate root, its line items, and the order
//! store boundary.

pub mod item;
pub mod order;
pub mod repository;

pub use item::OrderItem;
pub use order::{Order, OrderId, OrderStatus};
pub use repository::OrderRepository;
