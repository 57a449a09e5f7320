//! Product catalog domain: products, their types, and the catalog boundary.

pub mod product;
pub mod repository;

pub use product::{Product, ProductName, ProductType};
pub use repository::ProductRepository;
