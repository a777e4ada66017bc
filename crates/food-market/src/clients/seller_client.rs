//! # Seller Client
//!
//! Typed access to the `sellers` collection.
use crate::model::Seller;
use crate::seller_actor::SellerError;
use actor_framework::ResourceClient;

/// Client for interacting with the Seller actor.
#[derive(Clone)]
pub struct SellerClient {
    inner: ResourceClient<Seller>,
}

crate::impl_basic_client!(SellerClient, Seller, SellerError, seller);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SellerId, SellerPatch};
    use actor_framework::mock::MockClient;
    use actor_framework::{ActorClient, FrameworkError};

    #[tokio::test]
    async fn test_missing_seller_maps_to_not_found() {
        let mut mock = MockClient::<Seller>::new();
        mock.expect_patch(SellerId(5))
            .return_err(FrameworkError::NotFound("seller_5".to_string()));
        mock.expect_get(SellerId(5)).return_ok(None);
        let client = SellerClient::new(mock.client());

        let err = client
            .update_seller(SellerId(5), SellerPatch::Name("Sate Klathak".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, SellerError::NotFound("seller_5".to_string()));
        assert_eq!(client.get(SellerId(5)).await.unwrap(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let mut mock = MockClient::<Seller>::new();
        mock.expect_get(SellerId(1))
            .return_err(FrameworkError::ActorClosed);
        let client = SellerClient::new(mock.client());

        let err = client.get(SellerId(1)).await.unwrap_err();
        assert!(matches!(err, SellerError::ActorCommunicationError(_)));
    }
}
