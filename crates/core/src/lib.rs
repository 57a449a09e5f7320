//! `orderdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! money, quantity, and the domain error model shared by every other crate.

pub mod error;
pub mod money;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::{DEFAULT_CURRENCY, Money};
pub use quantity::{QUANTITY_EPSILON, Quantity};
pub use value_object::ValueObject;
