//! Integration-test support for the storefront engine: a harness that
//! runs a [`Storefront`](atku_store::Storefront) over its own temp data
//! directory, plus builders for the fixtures the flow tests share.

pub mod harness;

pub use harness::TestShop;

use atku_common::order::{PaymentMethod, ShippingAddress};
use atku_common::product::{Category, ProductDraft};
use atku_store::CheckoutRequest;

/// A minimal valid product draft.
pub fn product_draft(title: &str, price_paise: u64, category: Category) -> ProductDraft {
    ProductDraft {
        title: title.into(),
        description: format!("{title} for integration tests"),
        price_paise,
        category,
        images: vec!["https://example.com/product.jpg".into()],
        sizes: vec!["S".into(), "M".into(), "L".into()],
        colors: vec!["Black".into(), "White".into()],
        in_stock: true,
        featured: false,
    }
}

/// Checkout details for the demo customer.
pub fn checkout_request() -> CheckoutRequest {
    CheckoutRequest {
        contact_name: "Regular User".into(),
        contact_email: "user@example.com".into(),
        contact_phone: "555-0100".into(),
        shipping_address: ShippingAddress {
            address: "12 Market Street".into(),
            city: "Mumbai".into(),
            state: "MH".into(),
            zip_code: "400001".into(),
            country: "India".into(),
        },
        payment_method: PaymentMethod::CashOnDelivery,
    }
}
