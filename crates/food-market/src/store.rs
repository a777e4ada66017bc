//! Narrow storage interfaces the ordering core depends on.
//!
//! Production code passes the actor clients; tests substitute their own doubles.

use crate::menu_actor::MenuError;
use crate::model::{Menu, MenuId, Order, OrderId, OrderStatus, SequenceKey};
use crate::order_actor::OrderStoreError;
use crate::sequence_actor::SequenceError;
use async_trait::async_trait;

/// Counter rows backing identifier allocation.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    /// Last value issued for `key`, if the row exists.
    async fn find_sequence(&self, key: &SequenceKey) -> Result<Option<u32>, SequenceError>;

    /// Atomically adds one to the row for `key` and returns the new value.
    ///
    /// Implementations report a retryable write conflict as [`SequenceError::Conflict`].
    async fn increment_sequence(&self, key: &SequenceKey) -> Result<u32, SequenceError>;
}

/// Read access to published menus.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn find_menu_by_id(&self, id: MenuId) -> Result<Option<Menu>, MenuError>;
}

/// Persistence for assembled orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(&self, order: Order) -> Result<Order, OrderStoreError>;

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Sets `status = new` only if the stored status is still `expected`.
    ///
    /// Fails with [`OrderStoreError::InvalidTransition`] carrying the stored status
    /// otherwise.
    async fn update_order_status(
        &self,
        id: OrderId,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<Order, OrderStoreError>;
}
