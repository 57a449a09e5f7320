//! Fixed-point, currency-tagged monetary amounts.

use core::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Currency code used when none is given explicitly.
///
/// The whole system is single-currency; the tag exists so amounts are
/// self-describing, not to support conversion.
pub const DEFAULT_CURRENCY: &str = "UAH";

/// An exact monetary amount in minor units (e.g. kopiykas, cents).
///
/// Amounts are never negative in this domain; construction and arithmetic
/// enforce that. Equality is exact value equality on (amount, currency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Minor-unit amount. Invariant: `amount >= 0`.
    amount: i64,
    /// ISO 4217 currency code.
    currency: String,
}

impl Money {
    /// Creates an amount from minor units in the default currency.
    pub fn from_minor_units(amount: i64) -> DomainResult<Self> {
        Self::from_minor_units_in(amount, DEFAULT_CURRENCY)
    }

    pub fn from_minor_units_in(amount: i64, currency: &str) -> DomainResult<Self> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount);
        }
        Ok(Self {
            amount,
            currency: currency.to_owned(),
        })
    }

    /// Creates an amount from a decimal number of major units (e.g. `19.99`).
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        Self::from_decimal_in(amount, DEFAULT_CURRENCY)
    }

    /// Converts `amount * 100` to minor units, rounding half away from zero.
    ///
    /// The multiply happens in decimal arithmetic so the only rounding applied
    /// is the minor-unit rounding itself.
    pub fn from_decimal_in(amount: f64, currency: &str) -> DomainResult<Self> {
        if amount < 0.0 {
            return Err(DomainError::InvalidAmount);
        }
        let decimal = Decimal::from_f64(amount).ok_or(DomainError::AmountOverflow)?;
        let scaled = decimal
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(DomainError::AmountOverflow)?;
        Self::from_minor_units_in(round_to_minor_units(scaled)?, currency)
    }

    /// The additive identity in the default currency.
    pub fn zero() -> Self {
        Self {
            amount: 0,
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }

    /// Same-currency sum.
    ///
    /// Mixed-currency addition is an unchecked precondition, not a recoverable
    /// error: the system is single-currency by design.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        debug_assert_eq!(
            self.currency, other.currency,
            "mixed-currency arithmetic is not supported"
        );
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Scales the amount by a non-negative multiplier.
    ///
    /// Exact for integral multipliers; fractional multipliers go through a
    /// decimal multiply and round half away from zero to minor units.
    pub fn multiply(&self, multiplier: f64) -> DomainResult<Money> {
        if multiplier < 0.0 {
            return Err(DomainError::InvalidMultiplier);
        }
        let factor = Decimal::from_f64(multiplier).ok_or(DomainError::AmountOverflow)?;
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Self {
            amount: round_to_minor_units(product)?,
            currency: self.currency.clone(),
        })
    }

    pub fn minor_units(&self) -> i64 {
        self.amount
    }

    /// Major-unit rendering of the amount (display/reporting only).
    pub fn as_float(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.as_float(), self.currency)
    }
}

fn round_to_minor_units(value: Decimal) -> DomainResult<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DomainError::AmountOverflow)
}
