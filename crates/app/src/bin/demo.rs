//! End-to-end walkthrough of the order-to-cash flow: seed a catalog, fill an
//! order, issue an invoice (twice, to show cancellation) and settle it.

use anyhow::{Context, anyhow};

use orderdesk_app::{InvoiceService, OrderService, ProductService};
use orderdesk_infra::{InMemoryOrderStore, InMemoryProductCatalog};
use orderdesk_products::ProductName;

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let mut products = ProductService::new(InMemoryProductCatalog::new());
    let mut orders = OrderService::new(InMemoryOrderStore::new());
    let invoicing = InvoiceService::with_mock_gateway();

    products.create_product("iPhone 15", 999.99, "piece")?;
    products.create_product("Organic Rice", 2.50, "weight")?;

    let phone = products
        .find_product_by_name(&ProductName::new("iPhone 15")?)
        .ok_or_else(|| anyhow!("iPhone 15 missing from catalog"))?;
    let rice = products
        .find_product_by_name(&ProductName::new("Organic Rice")?)
        .ok_or_else(|| anyhow!("Organic Rice missing from catalog"))?;

    let order_id = orders.create_order();
    orders.add_product_to_order(order_id, &phone, 1.0)?;
    orders.add_product_to_order(order_id, &rice, 2.0)?;

    let order = orders
        .order_mut(order_id)
        .ok_or_else(|| anyhow!("order {order_id} vanished"))?;
    let total = order.calculate_total_amount()?;
    println!("order {order_id}: {} items, total {total}", order.items().len());

    // Issue twice: the first invoice gets cancelled, the second stays active.
    let first = invoicing.issue_invoice_for_order(order)?;
    let second = invoicing.issue_invoice_for_order(order)?;
    println!("invoiced {first}, re-invoiced {second}");

    invoicing
        .pay_latest_invoice(order)
        .context("settling the active invoice")?;

    println!("order status: {}", order.status());
    for (i, invoice) in order.invoices().iter().enumerate() {
        println!("invoice {i}: {} ({})", invoice.amount(), invoice.status());
    }

    Ok(())
}
