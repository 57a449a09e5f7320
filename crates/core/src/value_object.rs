//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two with the
/// same attribute values are the same value. `Money { 1999, "UAH" }` is a
/// value object; an order with its id is an entity.
///
/// "Modifying" a value object means constructing a new one, which is why
/// `Money::add` and friends return fresh instances instead of mutating.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
