use std::sync::Arc;

use tracing::debug;

use atku_common::cart::{CartLine, CartState};
use atku_common::product::{Product, ProductId};

use crate::error::StoreError;
use crate::port::{self, StatePort, CART_KEY};

/// The cart container. Every successful mutation re-derives both
/// aggregates and mirrors the whole cart to the port.
pub struct CartStore {
    state: CartState,
    port: Arc<dyn StatePort>,
}

impl CartStore {
    pub(crate) fn open(port: Arc<dyn StatePort>) -> Self {
        let state = port::load(port.as_ref(), CART_KEY).unwrap_or_default();
        Self { state, port }
    }

    /// Add `quantity` units of the product in the given size and color.
    /// A line already holding the same (product, size, color) triple is
    /// incremented instead of duplicated.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        size: &str,
        color: &str,
    ) -> Result<(), StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }
        self.state.add(product, quantity, size, color);
        self.persist()?;
        debug!(product = %product.id, quantity, size, color, "cart line added");
        Ok(())
    }

    pub fn remove(
        &mut self,
        product_id: ProductId,
        size: &str,
        color: &str,
    ) -> Result<(), StoreError> {
        if !self.state.remove(product_id, size, color) {
            return Err(StoreError::LineNotFound {
                product_id,
                size: size.to_string(),
                color: color.to_string(),
            });
        }
        self.persist()
    }

    /// Replace (not add to) the matching line's quantity.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) -> Result<(), StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }
        if !self.state.set_quantity(product_id, size, color, quantity) {
            return Err(StoreError::LineNotFound {
                product_id,
                size: size.to_string(),
                color: color.to_string(),
            });
        }
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.state.clear();
        self.persist()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.state.items
    }

    pub fn total_items(&self) -> u32 {
        self.state.total_items
    }

    pub fn total_paise(&self) -> u64 {
        self.state.total_paise
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        port::save(self.port.as_ref(), CART_KEY, &self.state)?;
        Ok(())
    }
}
