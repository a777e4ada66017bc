//! # Order Client
//!
//! Typed access to the `orders` collection and the production [`OrderStore`].
use crate::model::{Order, OrderId, OrderPatch, OrderStatus};
use crate::order_actor::OrderStoreError;
use crate::store::OrderStore;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

crate::impl_basic_client!(OrderClient, Order, OrderStoreError, order);

#[async_trait]
impl OrderStore for OrderClient {
    async fn insert_order(&self, order: Order) -> Result<Order, OrderStoreError> {
        self.insert(order).await
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError> {
        self.get(id).await
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<Order, OrderStoreError> {
        self.update_order(
            id,
            OrderPatch::Status {
                from: expected,
                to: new,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_patch};
    use actor_framework::FrameworkError;

    #[tokio::test]
    async fn test_status_update_sends_conditional_patch() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .update_order_status(OrderId(8), OrderStatus::Created, OrderStatus::Accepted)
                .await
        });

        let (id, patch, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert_eq!(id, OrderId(8));
        assert_eq!(
            patch,
            OrderPatch::Status {
                from: OrderStatus::Created,
                to: OrderStatus::Accepted
            }
        );

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderStoreError::InvalidTransition {
                    from: OrderStatus::Rejected,
                    to: OrderStatus::Accepted,
                },
            ))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(
            result,
            Err(OrderStoreError::InvalidTransition {
                from: OrderStatus::Rejected,
                to: OrderStatus::Accepted
            })
        );
    }
}
