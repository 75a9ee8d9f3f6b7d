use atku_common::order::{OrderId, OrderStatus};
use atku_common::product::ProductId;
use thiserror::Error;

use crate::port::PortError;

/// Every failure the engine reports. State is left untouched in all
/// variants except `Persist`, where the in-memory mutation has already
/// applied and only the mirror write failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("no active session")]
    NotAuthenticated,

    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("no cart line for product {product_id} in size {size}, color {color}")]
    LineNotFound {
        product_id: ProductId,
        size: String,
        color: String,
    },

    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("order status cannot change from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    #[error("persistence failure: {0}")]
    Persist(#[from] PortError),
}
