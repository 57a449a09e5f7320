use crate::order::{Order, OrderId};

/// Order store boundary.
///
/// Implementations assign monotonically increasing ids starting at 1 and hand
/// out references into the stored aggregates: mutations performed through
/// `find_by_id_mut` are mutations of the stored order.
pub trait OrderRepository {
    /// Stores the order and returns its newly assigned id.
    fn save(&mut self, order: Order) -> OrderId;

    fn find_by_id(&self, id: OrderId) -> Option<&Order>;

    fn find_by_id_mut(&mut self, id: OrderId) -> Option<&mut Order>;

    fn find_all(&self) -> Vec<&Order>;

    /// All orders paired with their ids, in id order.
    fn find_all_with_ids(&self) -> Vec<(OrderId, &Order)>;

    /// Drops every stored order and resets id assignment back to 1.
    fn clear(&mut self);
}
