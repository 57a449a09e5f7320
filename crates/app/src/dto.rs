//! Request payloads accepted at the application boundary.
//!
//! Validation here is shallow (present, non-empty, positive); the domain
//! types re-validate everything on construction.

use serde::Deserialize;

use orderdesk_core::{DomainError, DomainResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub product_type: String,
}

impl CreateProductRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_request("product name is required"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::invalid_request(
                "product price must be a non-negative number",
            ));
        }
        if self.product_type.trim().is_empty() {
            return Err(DomainError::invalid_request("product type is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddProductToOrderRequest {
    pub order_id: u64,
    pub product_name: String,
    pub quantity: f64,
}

impl AddProductToOrderRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.order_id == 0 {
            return Err(DomainError::invalid_request("order id is required"));
        }
        if self.product_name.trim().is_empty() {
            return Err(DomainError::invalid_request("product name is required"));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(DomainError::invalid_request(
                "quantity must be a positive number",
            ));
        }
        Ok(())
    }
}
