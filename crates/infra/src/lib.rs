//! In-memory infrastructure: repository implementations and the mock payment
//! gateway. Everything here sits behind a trait from the domain crates, so a
//! persistent backend can be swapped in without touching the core.

pub mod catalog;
pub mod order_store;
pub mod payment;

pub use catalog::InMemoryProductCatalog;
pub use order_store::InMemoryOrderStore;
pub use payment::MockCreditCardPayment;
