//! [`ActorEntity`] implementation for [`Order`].
//!
//! Status changes arrive as [`OrderPatch::Status`] carrying the status the caller
//! observed. The check and the write happen inside the actor, so of two racing
//! requests for the same transition only the first one applies.

use super::error::OrderStoreError;
use crate::model::{Order, OrderId, OrderPatch};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Orders have no custom actions.
#[derive(Debug, Clone, Copy)]
pub enum OrderAction {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = ();
    type Error = OrderStoreError;

    fn id(&self) -> OrderId {
        self.order_id
    }

    async fn on_patch(&mut self, patch: OrderPatch, _ctx: &()) -> Result<(), OrderStoreError> {
        match patch {
            OrderPatch::Status { from, to } => {
                if self.status != from || !from.can_become(to) {
                    return Err(OrderStoreError::InvalidTransition {
                        from: self.status,
                        to,
                    });
                }
                self.status = to;
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<(), OrderStoreError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, OrderStatus, SellerId};

    fn order(status: OrderStatus) -> Order {
        Order {
            order_id: OrderId(1),
            customer_id: CustomerId(2),
            seller_id: SellerId(3),
            source_address: "Wijilan".to_string(),
            delivery_address: "Sleman".to_string(),
            lines: Vec::new(),
            total_price: 0.0,
            status,
        }
    }

    #[tokio::test]
    async fn test_status_patch_requires_expected_status() {
        let mut o = order(OrderStatus::Accepted);
        let err = o
            .on_patch(
                OrderPatch::Status {
                    from: OrderStatus::Created,
                    to: OrderStatus::Accepted,
                },
                &(),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            OrderStoreError::InvalidTransition {
                from: OrderStatus::Accepted,
                to: OrderStatus::Accepted
            }
        );
        assert_eq!(o.status, OrderStatus::Accepted);
    }

    #[tokio::test]
    async fn test_status_patch_follows_transition_table() {
        let mut o = order(OrderStatus::Created);
        let result = o
            .on_patch(
                OrderPatch::Status {
                    from: OrderStatus::Created,
                    to: OrderStatus::Completed,
                },
                &(),
            )
            .await;
        assert!(result.is_err());

        o.on_patch(
            OrderPatch::Status {
                from: OrderStatus::Created,
                to: OrderStatus::Accepted,
            },
            &(),
        )
        .await
        .unwrap();
        assert_eq!(o.status, OrderStatus::Accepted);
    }
}
