use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use atku_common::order::{Order, OrderDraft, OrderHistory, OrderId, OrderStatus};
use atku_common::user::UserId;

use crate::error::StoreError;
use crate::port::{self, StatePort, ORDERS_KEY};

/// The order history container. Orders are append-only; only status,
/// payment status and `updated_at` change after placement. The
/// most-recent-order marker is in-memory only.
pub struct OrderStore {
    state: OrderHistory,
    current: Option<OrderId>,
    port: Arc<dyn StatePort>,
}

impl OrderStore {
    pub(crate) fn open(port: Arc<dyn StatePort>) -> Self {
        let state = port::load(port.as_ref(), ORDERS_KEY).unwrap_or_default();
        Self {
            state,
            current: None,
            port,
        }
    }

    /// Mint an order from the draft: fresh id, `Pending` status, both
    /// timestamps set to now. The new order becomes the current one.
    pub fn create(&mut self, draft: OrderDraft) -> Result<OrderId, StoreError> {
        let id = self.state.insert(draft, Utc::now());
        self.current = Some(id);
        self.persist()?;
        info!(%id, "order placed");
        Ok(id)
    }

    /// Move the order to `status`, stamping `updated_at`. Transitions
    /// outside the status table are rejected and change nothing.
    pub fn set_status(&mut self, id: OrderId, status: OrderStatus) -> Result<(), StoreError> {
        let order = self.state.get_mut(id).ok_or(StoreError::OrderNotFound(id))?;
        let from = order.status;
        if !from.can_transition_to(status) {
            return Err(StoreError::InvalidTransition { from, to: status });
        }
        order.status = status;
        order.updated_at = Utc::now();
        self.persist()?;
        info!(%id, from = %from, to = %status, "order status updated");
        Ok(())
    }

    /// Forget the most-recent-order marker. The order itself stays.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Order> {
        self.current.and_then(|id| self.state.get(id))
    }

    pub fn all(&self) -> &[Order] {
        &self.state.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.state.get(id)
    }

    pub fn by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.state.by_status(status)
    }

    /// All orders, newest first, truncated to `limit`.
    pub fn recent(&self, limit: usize) -> Vec<&Order> {
        self.state.recent(limit)
    }

    pub fn by_customer(&self, customer_id: UserId) -> Vec<&Order> {
        self.state.by_customer(customer_id)
    }

    fn persist(&self) -> Result<(), StoreError> {
        port::save(self.port.as_ref(), ORDERS_KEY, &self.state)?;
        Ok(())
    }
}
