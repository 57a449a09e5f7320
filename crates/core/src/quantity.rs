//! Positive scalar quantities with integer/fractional discrimination.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Absolute tolerance for quantity equality.
///
/// Kept as an absolute (not relative) epsilon with exactly this value; the
/// behavior of quantity comparison is defined in terms of it.
pub const QUANTITY_EPSILON: f64 = 1e-4;

/// A strictly positive amount of something (pieces, kilograms, ...).
///
/// Zero and negative values are rejected at construction, so a `Quantity`
/// in hand is always usable as a multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity {
    value: f64,
}

impl Quantity {
    pub fn from_float(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidQuantity);
        }
        Ok(Self { value })
    }

    pub fn from_int(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::InvalidQuantity);
        }
        Ok(Self {
            value: value as f64,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// True iff the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.value.floor() == self.value
    }
}

/// Tolerance-based equality: quantities within [`QUANTITY_EPSILON`] of each
/// other compare equal, absorbing floating-point noise from user input.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        (self.value - other.value).abs() < QUANTITY_EPSILON
    }
}

impl ValueObject for Quantity {}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.value as i64)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
