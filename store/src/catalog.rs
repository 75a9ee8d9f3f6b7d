use std::sync::Arc;

use tracing::debug;

use atku_common::catalog::{CatalogState, FilterCriteria, FilterPatch};
use atku_common::product::{Product, ProductDraft, ProductId, ProductPatch};
use atku_common::seed;

use crate::error::StoreError;
use crate::port::{self, StatePort, PRODUCTS_KEY};

/// The product catalog container. Products are mirrored to the port
/// after every mutation; browse filters live in memory only and reset
/// on every restart.
pub struct CatalogStore {
    state: CatalogState,
    filters: FilterCriteria,
    port: Arc<dyn StatePort>,
}

impl CatalogStore {
    /// Restore the catalog from the port, seeding the demo set when
    /// nothing usable is persisted yet.
    pub(crate) fn open(port: Arc<dyn StatePort>) -> Self {
        let state = port::load(port.as_ref(), PRODUCTS_KEY).unwrap_or_else(seed::demo_catalog);
        Self {
            state,
            filters: FilterCriteria::default(),
            port,
        }
    }

    /// Add a product under a fresh id. No title uniqueness check.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<ProductId, StoreError> {
        let id = self.state.insert(draft);
        self.persist()?;
        debug!(%id, "product added");
        Ok(id)
    }

    /// Shallow-merge the patch into the product.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        if !self.state.update(id, patch) {
            return Err(StoreError::ProductNotFound(id));
        }
        self.persist()
    }

    pub fn remove_product(&mut self, id: ProductId) -> Result<(), StoreError> {
        if !self.state.remove(id) {
            return Err(StoreError::ProductNotFound(id));
        }
        self.persist()?;
        debug!(%id, "product removed");
        Ok(())
    }

    /// Replace the whole catalog with the demo seed set.
    pub fn reset_to_demo(&mut self) -> Result<(), StoreError> {
        self.state = seed::demo_catalog();
        self.persist()
    }

    /// Shallow-merge into the current browse criteria. Not persisted.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.apply(patch);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.state.get(id)
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.state.featured()
    }

    /// Current criteria applied over the full catalog, evaluated fresh.
    pub fn filtered(&self) -> Vec<&Product> {
        self.state.filtered(&self.filters)
    }

    fn persist(&self) -> Result<(), StoreError> {
        port::save(self.port.as_ref(), PRODUCTS_KEY, &self.state)?;
        Ok(())
    }
}
