use std::sync::Arc;

use atku_common::checkout::CheckoutTotals;
use atku_common::order::{CustomerInfo, OrderDraft, OrderId, PaymentMethod, ShippingAddress};

use crate::auth::AuthStore;
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::credentials::{CredentialVerifier, DemoAccounts};
use crate::error::StoreError;
use crate::orders::OrderStore;
use crate::port::StatePort;

/// Checkout details collected from the customer at order placement.
/// Contact fields are snapshotted into the order; the customer id comes
/// from the active session.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

/// The aggregate store handle: one instance owns all four state
/// containers over a single persistence port. Explicitly passed, never
/// global, so tests construct isolated instances.
pub struct Storefront {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub orders: OrderStore,
    pub auth: AuthStore,
}

impl Storefront {
    /// Restore every container from the port. Absent or unreadable
    /// documents fall back to their defaults: the demo catalog, an empty
    /// cart, an empty order history, no session.
    pub fn open(port: Arc<dyn StatePort>, verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            catalog: CatalogStore::open(Arc::clone(&port)),
            cart: CartStore::open(Arc::clone(&port)),
            orders: OrderStore::open(Arc::clone(&port)),
            auth: AuthStore::open(port, verifier),
        }
    }

    /// Open with the demo account book.
    pub fn open_demo(port: Arc<dyn StatePort>) -> Self {
        Self::open(port, Box::new(DemoAccounts::new()))
    }

    /// Place an order from the live cart, then clear the cart. The two
    /// writes are sequential with no rollback: if clearing the cart
    /// fails the order stays placed.
    pub fn place_order(&mut self, request: CheckoutRequest) -> Result<OrderId, StoreError> {
        let user = self.auth.user().ok_or(StoreError::NotAuthenticated)?;
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let draft = OrderDraft {
            customer: CustomerInfo {
                id: user.id,
                name: request.contact_name,
                email: request.contact_email,
                phone: request.contact_phone,
            },
            shipping_address: request.shipping_address,
            items: self.cart.lines().to_vec(),
            total_paise: self.cart.total_paise(),
            payment_method: request.payment_method,
        };

        let id = self.orders.create(draft)?;
        self.cart.clear()?;
        Ok(id)
    }

    /// Shipping/tax breakdown for the live cart.
    pub fn checkout_totals(&self) -> CheckoutTotals {
        CheckoutTotals::compute(self.cart.total_paise())
    }
}
