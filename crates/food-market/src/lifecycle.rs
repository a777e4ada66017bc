//! # Order Lifecycle
//!
//! Status transitions of stored orders:
//!
//! | from \ to  | accepted | rejected | cancelled | completed |
//! |------------|----------|----------|-----------|-----------|
//! | created    | accept   | reject   | cancel    |           |
//! | accepted   |          |          | cancel    | complete  |
//!
//! `rejected`, `cancelled` and `completed` are terminal. The final check happens in
//! the order store as a compare-and-set on the status read here, so when two callers
//! race on the same order exactly one of them succeeds.

use crate::clients::OrderClient;
use crate::error::MarketError;
use crate::model::{Order, OrderId, OrderStatus};
use crate::order_actor::OrderStoreError;
use crate::store::OrderStore;
use tracing::{info, instrument, warn};

/// Drives orders through their status transitions.
#[derive(Clone)]
pub struct OrderLifecycle<O = OrderClient> {
    orders: O,
}

impl<O: OrderStore> OrderLifecycle<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    /// Seller accepts a freshly created order.
    pub async fn accept(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.transition(order_id, OrderStatus::Accepted).await
    }

    /// Seller declines a freshly created order.
    pub async fn reject(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.transition(order_id, OrderStatus::Rejected).await
    }

    /// Withdraws an order that has not been completed.
    pub async fn cancel(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.transition(order_id, OrderStatus::Cancelled).await
    }

    /// Marks an accepted order as fulfilled.
    pub async fn complete(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.transition(order_id, OrderStatus::Completed).await
    }

    #[instrument(skip(self))]
    async fn transition(&self, order_id: OrderId, to: OrderStatus) -> Result<Order, MarketError> {
        let order = self
            .orders
            .find_order(order_id)
            .await
            .map_err(|e| MarketError::OrderPersistence {
                order_id,
                reason: e.to_string(),
            })?
            .ok_or(MarketError::OrderNotFound(order_id))?;

        let from = order.status;
        if !from.can_become(to) {
            warn!(%from, "Transition not allowed");
            return Err(MarketError::InvalidTransition { order_id, from, to });
        }

        match self.orders.update_order_status(order_id, from, to).await {
            Ok(updated) => {
                info!(%from, "Status changed");
                Ok(updated)
            }
            Err(OrderStoreError::InvalidTransition { from, to }) => {
                warn!(%from, "Status changed concurrently");
                Err(MarketError::InvalidTransition { order_id, from, to })
            }
            Err(OrderStoreError::NotFound(_)) => Err(MarketError::OrderNotFound(order_id)),
            Err(e) => Err(MarketError::OrderPersistence {
                order_id,
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, SellerId};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    fn order(status: OrderStatus) -> Order {
        Order {
            order_id: OrderId(1),
            customer_id: CustomerId(1),
            seller_id: SellerId(1),
            source_address: "Jl. Malioboro 1".to_string(),
            delivery_address: "Jl. Kaliurang 7".to_string(),
            lines: Vec::new(),
            total_price: 37.5,
            status,
        }
    }

    #[tokio::test]
    async fn test_accept_created_order() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_ok(Some(order(OrderStatus::Created)));
        mock.expect_patch(OrderId(1))
            .return_ok(order(OrderStatus::Accepted));
        let lifecycle = OrderLifecycle::new(OrderClient::new(mock.client()));

        let accepted = lifecycle.accept(OrderId(1)).await.unwrap();
        assert_eq!(accepted.status, OrderStatus::Accepted);
        assert_eq!(accepted.total_price, 37.5);
        mock.verify();
    }

    #[tokio::test]
    async fn test_accept_twice_is_refused_without_writing() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_ok(Some(order(OrderStatus::Accepted)));
        let lifecycle = OrderLifecycle::new(OrderClient::new(mock.client()));

        assert_eq!(
            lifecycle.accept(OrderId(1)).await,
            Err(MarketError::InvalidTransition {
                order_id: OrderId(1),
                from: OrderStatus::Accepted,
                to: OrderStatus::Accepted,
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_lost_race_reports_stored_status() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_ok(Some(order(OrderStatus::Created)));
        mock.expect_patch(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderStoreError::InvalidTransition {
                    from: OrderStatus::Cancelled,
                    to: OrderStatus::Accepted,
                },
            )));
        let lifecycle = OrderLifecycle::new(OrderClient::new(mock.client()));

        assert_eq!(
            lifecycle.accept(OrderId(1)).await,
            Err(MarketError::InvalidTransition {
                order_id: OrderId(1),
                from: OrderStatus::Cancelled,
                to: OrderStatus::Accepted,
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_order() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(42)).return_ok(None);
        let lifecycle = OrderLifecycle::new(OrderClient::new(mock.client()));

        assert_eq!(
            lifecycle.complete(OrderId(42)).await,
            Err(MarketError::OrderNotFound(OrderId(42)))
        );
    }

    #[tokio::test]
    async fn test_complete_requires_acceptance() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_ok(Some(order(OrderStatus::Created)));
        let lifecycle = OrderLifecycle::new(OrderClient::new(mock.client()));

        let err = lifecycle.complete(OrderId(1)).await.unwrap_err();
        assert!(matches!(err, MarketError::InvalidTransition { .. }));
    }
}
