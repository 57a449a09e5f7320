use orderdesk_core::{DomainResult, Money};

use crate::product::{Product, ProductName};

/// Catalog boundary.
///
/// Name uniqueness lives here, not inside [`Product`]: the catalog is the only
/// scope in which "unique name" is a meaningful statement. Implementations
/// return owned products; callers hold snapshots, and price changes go back
/// through the catalog.
pub trait ProductRepository {
    /// Persists a new product.
    ///
    /// Fails with `DuplicateProductName` if a product with the same name is
    /// already catalogued.
    fn save(&mut self, product: Product) -> DomainResult<()>;

    fn find_by_name(&self, name: &ProductName) -> Option<Product>;

    fn exists_by_name(&self, name: &ProductName) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Changes a catalogued product's price and returns the updated product.
    ///
    /// Fails with `ProductNotFound` for an unknown name. Order items that
    /// already snapshotted the old price keep it until explicitly
    /// recalculated.
    fn update_price(&mut self, name: &ProductName, new_price: Money) -> DomainResult<Product>;

    fn find_all(&self) -> Vec<Product>;

    fn clear(&mut self);
}
