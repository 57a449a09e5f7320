use std::collections::BTreeMap;

use tracing::debug;

use orderdesk_sales::{Order, OrderId, OrderRepository};

/// BTreeMap-backed order store; ids are assigned monotonically from 1.
#[derive(Debug)]
pub struct InMemoryOrderStore {
    orders: BTreeMap<u64, Order>,
    next_id: u64,
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderStore {
    fn save(&mut self, order: Order) -> OrderId {
        let id = self.next_id;
        self.next_id += 1;
        self.orders.insert(id, order);
        debug!(order_id = id, "order stored");
        OrderId::new(id)
    }

    fn find_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id.value())
    }

    fn find_by_id_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id.value())
    }

    fn find_all(&self) -> Vec<&Order> {
        self.orders.values().collect()
    }

    fn find_all_with_ids(&self) -> Vec<(OrderId, &Order)> {
        self.orders
            .iter()
            .map(|(id, order)| (OrderId::new(*id), order))
            .collect()
    }

    fn clear(&mut self) {
        self.orders.clear();
        self.next_id = 1;
    }
}
