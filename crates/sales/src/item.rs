use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainResult, Money, Quantity};
use orderdesk_products::Product;

/// A product bound to a validated quantity, with a cached line total.
///
/// The item snapshots the product at the moment it is added to an order. A
/// later catalog price change does not touch the cached total; callers that
/// want refreshed totals pass the current product to
/// [`OrderItem::recalculate_price`] explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    product: Product,
    quantity: Quantity,
    total_price: Money,
}

impl OrderItem {
    /// Validates the quantity against the product's type rule and caches
    /// the total eagerly, so an item in hand is always priced.
    pub fn create(product: &Product, quantity: Quantity) -> DomainResult<Self> {
        let total_price = product.calculate_total_price(&quantity)?;
        Ok(Self {
            product: product.clone(),
            quantity,
            total_price,
        })
    }

    /// Recomputes the cached total from the catalog's current product state.
    ///
    /// Nothing triggers this automatically; `Product::change_price` leaves
    /// existing items alone by design.
    pub fn recalculate_price(&mut self, product: &Product) -> DomainResult<()> {
        debug_assert_eq!(product.name(), self.product.name());
        self.total_price = product.calculate_total_price(&self.quantity)?;
        self.product = product.clone();
        Ok(())
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn total_price(&self) -> &Money {
        &self.total_price
    }
}
