use tracing::info;

use orderdesk_core::{DomainError, DomainResult, Quantity};
use orderdesk_products::Product;
use orderdesk_sales::{Order, OrderId, OrderRepository};

use crate::dto::AddProductToOrderRequest;

/// Order use cases: open orders and fill them with products.
pub struct OrderService<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn create_order(&mut self) -> OrderId {
        let id = self.repository.save(Order::create());
        info!(order_id = %id, "order created");
        id
    }

    pub fn add_product_to_order(
        &mut self,
        order_id: OrderId,
        product: &Product,
        quantity: f64,
    ) -> DomainResult<()> {
        let quantity = Quantity::from_float(quantity)?;
        let order = self
            .repository
            .find_by_id_mut(order_id)
            .ok_or(DomainError::OrderNotFound(order_id.value()))?;
        order.add_product(product, quantity)?;
        info!(order_id = %order_id, product = %product.name(), %quantity, "product added to order");
        Ok(())
    }

    pub fn add_product_to_order_from_request(
        &mut self,
        request: &AddProductToOrderRequest,
        product: &Product,
    ) -> DomainResult<()> {
        request.validate()?;
        self.add_product_to_order(OrderId::new(request.order_id), product, request.quantity)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.repository.find_by_id(id)
    }

    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.repository.find_by_id_mut(id)
    }

    pub fn all_orders(&self) -> Vec<&Order> {
        self.repository.find_all()
    }

    pub fn all_orders_with_ids(&self) -> Vec<(OrderId, &Order)> {
        self.repository.find_all_with_ids()
    }
}
