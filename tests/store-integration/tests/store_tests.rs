//! End-to-end flows over a file-backed storefront, including simulated
//! process restarts and corrupted persisted state.

use atku_common::catalog::{CategoryFilter, FilterPatch};
use atku_common::order::OrderStatus;
use atku_common::product::{Category, ProductPatch};
use atku_store::credentials::{
    DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, DEMO_CUSTOMER_EMAIL, DEMO_CUSTOMER_PASSWORD,
};
use atku_store::StoreError;

use atku_store_integration::{checkout_request, product_draft, TestShop};

#[test]
fn full_shopping_flow() {
    let mut t = TestShop::open();

    // Fresh shop starts on the demo catalog
    assert_eq!(t.shop.catalog.products().len(), 4);

    t.shop
        .auth
        .login(DEMO_CUSTOMER_EMAIL, DEMO_CUSTOMER_PASSWORD)
        .unwrap();

    let tee = t.shop.catalog.products()[0].clone();
    assert_eq!(tee.price_paise, 224_925);

    t.shop.cart.add(&tee, 1, "S", "Black").unwrap();
    t.shop.cart.add(&tee, 2, "S", "Black").unwrap();
    assert_eq!(t.shop.cart.lines().len(), 1);
    assert_eq!(t.shop.cart.lines()[0].quantity, 3);
    assert_eq!(t.shop.cart.total_paise(), 674_775);

    t.shop.cart.set_quantity(tee.id, "S", "Black", 1).unwrap();
    assert_eq!(t.shop.cart.total_paise(), 224_925);

    let snapshot = t.shop.cart.lines().to_vec();
    let id = t.shop.place_order(checkout_request()).unwrap();

    assert!(t.shop.cart.is_empty());
    assert_eq!(t.shop.cart.total_items(), 0);
    assert_eq!(t.shop.orders.all().len(), 1);

    let order = t.shop.orders.get(id).unwrap();
    assert_eq!(order.items, snapshot);
    assert_eq!(order.total_paise, 224_925);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(t.shop.orders.current().unwrap().id, id);
}

#[test]
fn every_container_survives_a_restart() {
    let mut t = TestShop::open();

    t.shop
        .auth
        .login(DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD)
        .unwrap();
    let added = t
        .shop
        .catalog
        .add_product(product_draft("ATKU Scarf", 99_900, Category::Accessories))
        .unwrap();

    let hoodie = t.shop.catalog.products()[1].clone();
    t.shop.cart.add(&hoodie, 2, "M", "Navy").unwrap();
    t.shop.place_order(checkout_request()).unwrap();
    t.shop.cart.add(&hoodie, 1, "L", "Black").unwrap();

    let products_before = t.shop.catalog.products().to_vec();
    let cart_before = t.shop.cart.lines().to_vec();
    let orders_before = t.shop.orders.all().to_vec();
    let user_before = t.shop.auth.user().unwrap().clone();

    t.reopen();

    assert_eq!(t.shop.catalog.products(), products_before.as_slice());
    assert!(t.shop.catalog.product(added).is_some());
    assert_eq!(t.shop.cart.lines(), cart_before.as_slice());
    assert_eq!(t.shop.cart.total_items(), 1);
    assert_eq!(t.shop.orders.all(), orders_before.as_slice());
    assert_eq!(t.shop.auth.user().unwrap(), &user_before);
    assert!(t.shop.auth.is_admin());
}

#[test]
fn admin_walks_an_order_through_its_statuses() {
    let mut t = TestShop::open();
    t.shop
        .auth
        .login(DEMO_CUSTOMER_EMAIL, DEMO_CUSTOMER_PASSWORD)
        .unwrap();

    let cap = t.shop.catalog.products()[3].clone();
    t.shop.cart.add(&cap, 1, "One Size", "Navy").unwrap();
    let id = t.shop.place_order(checkout_request()).unwrap();

    t.shop.orders.set_status(id, OrderStatus::Processing).unwrap();
    t.shop.orders.set_status(id, OrderStatus::Shipped).unwrap();

    // Shipped orders cannot be cancelled
    assert!(matches!(
        t.shop.orders.set_status(id, OrderStatus::Cancelled),
        Err(StoreError::InvalidTransition { .. })
    ));

    t.shop.orders.set_status(id, OrderStatus::Delivered).unwrap();

    t.reopen();
    assert_eq!(
        t.shop.orders.get(id).unwrap().status,
        OrderStatus::Delivered
    );
    assert_eq!(t.shop.orders.by_status(OrderStatus::Delivered).len(), 1);
    assert!(t.shop.orders.by_status(OrderStatus::Pending).is_empty());
}

#[test]
fn order_views_scope_by_customer_and_recency() {
    let mut t = TestShop::open();

    t.shop
        .auth
        .login(DEMO_CUSTOMER_EMAIL, DEMO_CUSTOMER_PASSWORD)
        .unwrap();
    let tee = t.shop.catalog.products()[0].clone();
    t.shop.cart.add(&tee, 1, "S", "Black").unwrap();
    t.shop.place_order(checkout_request()).unwrap();
    let customer_id = t.shop.auth.user().unwrap().id;

    t.shop
        .auth
        .register("Alice", "alice@example.com", "s3cret")
        .unwrap();
    t.shop.cart.add(&tee, 1, "M", "White").unwrap();
    let second = t.shop.place_order(checkout_request()).unwrap();

    assert_eq!(t.shop.orders.all().len(), 2);
    assert_eq!(t.shop.orders.by_customer(customer_id).len(), 1);

    let recent = t.shop.orders.recent(1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, second);
}

#[test]
fn corrupted_documents_degrade_to_fresh_state() {
    let mut t = TestShop::open();
    t.shop
        .auth
        .login(DEMO_CUSTOMER_EMAIL, DEMO_CUSTOMER_PASSWORD)
        .unwrap();
    let tee = t.shop.catalog.products()[0].clone();
    t.shop.cart.add(&tee, 2, "S", "Black").unwrap();

    t.clobber("cart", "{definitely not json");
    t.clobber("user", "42");
    t.reopen();

    // Corrupt cart and user fall back to empty; untouched keys survive
    assert!(t.shop.cart.is_empty());
    assert!(!t.shop.auth.is_authenticated());
    assert_eq!(t.shop.catalog.products().len(), 4);
}

#[test]
fn schema_version_mismatch_is_treated_as_absent() {
    let mut t = TestShop::open();
    let tee = t.shop.catalog.products()[0].clone();
    t.shop.cart.add(&tee, 1, "S", "Black").unwrap();

    t.clobber("cart", "{\"version\":99,\"data\":{\"items\":[]}}");
    t.reopen();
    assert!(t.shop.cart.is_empty());
}

#[test]
fn login_failure_leaves_no_session_behind() {
    let mut t = TestShop::open();

    let err = t.shop.auth.login("x@x.com", "wrong").unwrap_err();
    assert!(!err.to_string().is_empty());
    assert!(!t.shop.auth.is_authenticated());

    t.reopen();
    assert!(!t.shop.auth.is_authenticated());
}

#[test]
fn logout_clears_the_persisted_session() {
    let mut t = TestShop::open();
    t.shop
        .auth
        .login(DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD)
        .unwrap();
    t.reopen();
    assert!(t.shop.auth.is_admin());

    t.shop.auth.logout().unwrap();
    t.reopen();
    assert!(!t.shop.auth.is_authenticated());
}

#[test]
fn registered_accounts_do_not_outlive_the_verifier() {
    let mut t = TestShop::open();
    t.shop
        .auth
        .register("Alice", "alice@example.com", "s3cret")
        .unwrap();

    // The session itself is persisted and restored...
    t.reopen();
    assert!(t.shop.auth.is_authenticated());
    assert_eq!(t.shop.auth.user().unwrap().email, "alice@example.com");

    // ...but after logging out, the account is gone: the demo verifier
    // only ever knows the two seeded accounts plus same-process signups.
    t.shop.auth.logout().unwrap();
    assert!(matches!(
        t.shop.auth.login("alice@example.com", "s3cret"),
        Err(StoreError::InvalidCredentials)
    ));
}

#[test]
fn catalog_edits_apply_to_later_carts_but_not_placed_orders() {
    let mut t = TestShop::open();
    t.shop
        .auth
        .login(DEMO_CUSTOMER_EMAIL, DEMO_CUSTOMER_PASSWORD)
        .unwrap();

    let tee = t.shop.catalog.products()[0].clone();
    t.shop.cart.add(&tee, 1, "S", "Black").unwrap();
    let id = t.shop.place_order(checkout_request()).unwrap();

    t.shop
        .catalog
        .update_product(
            tee.id,
            ProductPatch {
                price_paise: Some(100_000),
                ..ProductPatch::default()
            },
        )
        .unwrap();

    // The historical order keeps its snapshot price
    assert_eq!(t.shop.orders.get(id).unwrap().items[0].price_paise, 224_925);

    // A fresh cart line picks up the new price
    let tee = t.shop.catalog.product(tee.id).unwrap().clone();
    t.shop.cart.add(&tee, 1, "S", "Black").unwrap();
    assert_eq!(t.shop.cart.total_paise(), 100_000);
}

#[test]
fn browse_filters_reset_on_restart() {
    let mut t = TestShop::open();
    t.shop.catalog.set_filters(FilterPatch {
        category: Some(CategoryFilter::Only(Category::Hoodies)),
        query: Some("hoodie".into()),
        ..FilterPatch::default()
    });
    assert_eq!(t.shop.catalog.filtered().len(), 1);

    t.reopen();
    assert_eq!(t.shop.catalog.filtered().len(), 4);
}
