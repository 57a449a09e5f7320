//! Full order-to-cash flow exercised through the application services only,
//! the way an outer transport layer would drive them.

use orderdesk_app::{
    AddProductToOrderRequest, CreateProductRequest, InvoiceService, OrderService, ProductService,
};
use orderdesk_core::{DomainError, Money};
use orderdesk_infra::{InMemoryOrderStore, InMemoryProductCatalog};
use orderdesk_products::ProductName;
use orderdesk_sales::{OrderId, OrderStatus};

fn services() -> (
    ProductService<InMemoryProductCatalog>,
    OrderService<InMemoryOrderStore>,
    InvoiceService,
) {
    (
        ProductService::new(InMemoryProductCatalog::new()),
        OrderService::new(InMemoryOrderStore::new()),
        InvoiceService::with_mock_gateway(),
    )
}

#[test]
fn order_to_cash_happy_path() {
    let (mut products, mut orders, invoicing) = services();

    products.create_product("iPhone 15", 999.99, "piece").unwrap();
    products.create_product("Organic Rice", 2.50, "weight").unwrap();

    let phone = products
        .find_product_by_name(&ProductName::new("iPhone 15").unwrap())
        .unwrap();
    let rice = products
        .find_product_by_name(&ProductName::new("Organic Rice").unwrap())
        .unwrap();

    let order_id = orders.create_order();
    orders.add_product_to_order(order_id, &phone, 1.0).unwrap();
    orders.add_product_to_order(order_id, &rice, 2.0).unwrap();

    let order = orders.order_mut(order_id).unwrap();
    assert_eq!(
        order.calculate_total_amount().unwrap(),
        Money::from_decimal(1004.99).unwrap()
    );

    let amount = invoicing.issue_invoice_for_order(order).unwrap();
    assert_eq!(amount, Money::from_decimal(1004.99).unwrap());
    assert_eq!(order.status(), OrderStatus::Invoiced);

    invoicing.pay_latest_invoice(order).unwrap();

    assert_eq!(order.status(), OrderStatus::Paid);
    assert!(order.invoices()[0].is_paid());
}

#[test]
fn reissuing_cancels_the_previous_invoice() {
    let (mut products, mut orders, invoicing) = services();
    products.create_product("iPhone 15", 999.99, "piece").unwrap();
    let phone = products
        .find_product_by_name(&ProductName::new("iPhone 15").unwrap())
        .unwrap();
    let order_id = orders.create_order();
    orders.add_product_to_order(order_id, &phone, 1.0).unwrap();
    let order = orders.order_mut(order_id).unwrap();

    invoicing.issue_invoice_for_order(order).unwrap();
    invoicing.issue_invoice_for_order(order).unwrap();
    invoicing.pay_latest_invoice(order).unwrap();

    assert_eq!(order.invoices().len(), 2);
    assert!(order.invoices()[0].is_cancelled());
    assert!(order.invoices()[1].is_paid());
    assert_eq!(order.status(), OrderStatus::Paid);
}

#[test]
fn paid_orders_reject_further_edits() {
    let (mut products, mut orders, invoicing) = services();
    products.create_product("iPhone 15", 999.99, "piece").unwrap();
    let phone = products
        .find_product_by_name(&ProductName::new("iPhone 15").unwrap())
        .unwrap();
    let order_id = orders.create_order();
    orders.add_product_to_order(order_id, &phone, 1.0).unwrap();
    {
        let order = orders.order_mut(order_id).unwrap();
        invoicing.issue_invoice_for_order(order).unwrap();
        invoicing.pay_latest_invoice(order).unwrap();
    }

    let err = orders
        .add_product_to_order(order_id, &phone, 1.0)
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::OrderNotEditable {
            status: "paid".into()
        }
    );
}

#[test]
fn the_dto_path_drives_the_same_flow() {
    let (mut products, mut orders, invoicing) = services();

    let product = products
        .create_product_from_request(&CreateProductRequest {
            name: "Organic Rice".into(),
            price: 2.50,
            product_type: "weight".into(),
        })
        .unwrap();

    let order_id = orders.create_order();
    orders
        .add_product_to_order_from_request(
            &AddProductToOrderRequest {
                order_id: order_id.value(),
                product_name: "Organic Rice".into(),
                quantity: 2.5,
            },
            &product,
        )
        .unwrap();

    let order = orders.order_mut(order_id).unwrap();
    let amount = invoicing.issue_invoice_for_order(order).unwrap();

    assert_eq!(amount, Money::from_decimal(6.25).unwrap());
}

#[test]
fn price_changes_reach_items_only_through_recalculation() {
    let (mut products, mut orders, _) = services();
    products.create_product("iPhone 15", 999.99, "piece").unwrap();
    let name = ProductName::new("iPhone 15").unwrap();
    let phone = products.find_product_by_name(&name).unwrap();
    let order_id = orders.create_order();
    orders.add_product_to_order(order_id, &phone, 1.0).unwrap();

    let updated = products
        .change_price(&name, Money::from_decimal(899.99).unwrap())
        .unwrap();

    let order = orders.order_mut(order_id).unwrap();
    assert_eq!(
        order.calculate_total_amount().unwrap(),
        Money::from_decimal(999.99).unwrap()
    );

    order.recalculate_item_prices(&updated).unwrap();
    assert_eq!(
        order.calculate_total_amount().unwrap(),
        Money::from_decimal(899.99).unwrap()
    );
}

#[test]
fn duplicate_products_are_rejected_at_the_service_layer() {
    let (mut products, _, _) = services();
    products.create_product("iPhone 15", 999.99, "piece").unwrap();

    let err = products
        .create_product("iPhone 15", 899.99, "piece")
        .unwrap_err();

    assert_eq!(err, DomainError::DuplicateProductName("iPhone 15".into()));
}

#[test]
fn adding_to_a_missing_order_reports_the_id() {
    let (mut products, mut orders, _) = services();
    products.create_product("iPhone 15", 999.99, "piece").unwrap();
    let phone = products
        .find_product_by_name(&ProductName::new("iPhone 15").unwrap())
        .unwrap();

    let err = orders
        .add_product_to_order(OrderId::new(7), &phone, 1.0)
        .unwrap_err();

    assert_eq!(err, DomainError::OrderNotFound(7));
}
