use std::str::FromStr;

use tracing::info;

use orderdesk_core::{DomainResult, Money};
use orderdesk_products::{Product, ProductName, ProductRepository, ProductType};

use crate::dto::CreateProductRequest;

/// Catalog use cases: create products from raw input and look them up.
pub struct ProductService<R: ProductRepository> {
    repository: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Parses raw input into a [`Product`] and stores it.
    pub fn create_product(
        &mut self,
        name: &str,
        price: f64,
        product_type: &str,
    ) -> DomainResult<Product> {
        let name = ProductName::new(name)?;
        let price = Money::from_decimal(price)?;
        let product_type = ProductType::from_str(product_type)?;

        let product = Product::create(name, price, product_type);
        self.repository.save(product.clone())?;
        info!(product = %product.name(), price = %product.price(), "product created");
        Ok(product)
    }

    pub fn create_product_from_request(
        &mut self,
        request: &CreateProductRequest,
    ) -> DomainResult<Product> {
        request.validate()?;
        self.create_product(&request.name, request.price, &request.product_type)
    }

    /// Changes a catalogued product's price.
    ///
    /// Existing order items keep their snapshotted totals until
    /// `Order::recalculate_item_prices` is called with the updated product.
    pub fn change_price(&mut self, name: &ProductName, new_price: Money) -> DomainResult<Product> {
        let product = self.repository.update_price(name, new_price)?;
        info!(product = %product.name(), price = %product.price(), "product price changed");
        Ok(product)
    }

    pub fn find_product_by_name(&self, name: &ProductName) -> Option<Product> {
        self.repository.find_by_name(name)
    }

    pub fn all_products(&self) -> Vec<Product> {
        self.repository.find_all()
    }
}
