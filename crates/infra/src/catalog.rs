use tracing::debug;

use orderdesk_core::{DomainError, DomainResult, Money};
use orderdesk_products::{Product, ProductName, ProductRepository};

/// Vec-backed product catalog.
///
/// Stands in for the original session-backed storage; services only ever see
/// the [`ProductRepository`] trait.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductCatalog {
    fn save(&mut self, product: Product) -> DomainResult<()> {
        if self.exists_by_name(product.name()) {
            return Err(DomainError::DuplicateProductName(
                product.name().as_str().to_owned(),
            ));
        }
        debug!(product = %product.name(), "product catalogued");
        self.products.push(product);
        Ok(())
    }

    fn find_by_name(&self, name: &ProductName) -> Option<Product> {
        self.products.iter().find(|p| p.name() == name).cloned()
    }

    fn update_price(&mut self, name: &ProductName, new_price: Money) -> DomainResult<Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| DomainError::ProductNotFound(name.as_str().to_owned()))?;
        product.change_price(new_price);
        debug!(product = %name, price = %product.price(), "catalog price updated");
        Ok(product.clone())
    }

    fn find_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn clear(&mut self) {
        self.products.clear();
    }
}
