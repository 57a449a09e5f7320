use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Money, Quantity, ValueObject};

/// Product display/lookup name.
///
/// This is the product's identity, but uniqueness is enforced at the catalog
/// boundary ([`crate::ProductRepository::save`]), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub const MAX_LEN: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_product_name("name cannot be empty"));
        }
        if value.len() > Self::MAX_LEN {
            return Err(DomainError::invalid_product_name(format!(
                "name cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProductName {}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product type, fixed for the product's lifetime.
///
/// The type constrains which quantity shapes a product accepts: piece goods
/// are sold in whole units, weighed goods in any positive amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Piece,
    Weight,
}

impl ProductType {
    pub fn requires_integer_quantity(self) -> bool {
        matches!(self, ProductType::Piece)
    }

    pub fn allows_decimal_quantity(self) -> bool {
        matches!(self, ProductType::Weight)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Piece => "piece",
            ProductType::Weight => "weight",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "piece" => Ok(ProductType::Piece),
            "weight" => Ok(ProductType::Weight),
            other => Err(DomainError::InvalidProductType(other.to_owned())),
        }
    }
}

/// Catalog entry: name, unit price, and a quantity-shape constraint.
///
/// The price is the only mutable attribute. Changing it does not ripple into
/// totals that were already computed from it; callers refresh those
/// explicitly (see `OrderItem::recalculate_price` in the sales crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    price: Money,
    product_type: ProductType,
    created_at: DateTime<Utc>,
}

impl Product {
    pub fn create(name: ProductName, price: Money, product_type: ProductType) -> Self {
        Self {
            name,
            price,
            product_type,
            created_at: Utc::now(),
        }
    }

    /// Checks a quantity against this product's type rule.
    pub fn validate_quantity(&self, quantity: &Quantity) -> DomainResult<()> {
        if self.product_type.requires_integer_quantity() && !quantity.is_integer() {
            return Err(DomainError::IncompatibleQuantityForType {
                product_type: self.product_type.as_str().to_owned(),
                quantity: quantity.value(),
            });
        }
        Ok(())
    }

    /// Re-validates the quantity, then prices it at the current unit price.
    pub fn calculate_total_price(&self, quantity: &Quantity) -> DomainResult<Money> {
        self.validate_quantity(quantity)?;
        self.price.multiply(quantity.value())
    }

    /// In-place price mutation. Already-computed line totals keep the old
    /// price until explicitly recalculated.
    pub fn change_price(&mut self, new_price: Money) {
        self.price = new_price;
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
