//! [`ActorEntity`] implementation for [`Seller`].

use super::error::SellerError;
use crate::model::{Seller, SellerId, SellerPatch};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Sellers have no custom actions.
#[derive(Debug, Clone, Copy)]
pub enum SellerAction {}

#[async_trait]
impl ActorEntity for Seller {
    type Id = SellerId;
    type Patch = SellerPatch;
    type Action = SellerAction;
    type ActionResult = ();
    type Context = ();
    type Error = SellerError;

    fn id(&self) -> SellerId {
        self.seller_id
    }

    /// Applies a single field update.
    ///
    /// `Hours` replaces both ends at once; overnight hours (`open_hour > closed_hour`)
    /// are stored as given.
    async fn on_patch(&mut self, patch: SellerPatch, _ctx: &()) -> Result<(), SellerError> {
        match patch {
            SellerPatch::Name(name) => self.name = name,
            SellerPatch::Address(address) => self.address = address,
            SellerPatch::PhoneNumber(phone_number) => self.phone_number = phone_number,
            SellerPatch::Hours {
                open_hour,
                closed_hour,
            } => {
                self.open_hour = open_hour;
                self.closed_hour = closed_hour;
            }
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: SellerAction, _ctx: &()) -> Result<(), SellerError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SellerCreate;

    #[tokio::test]
    async fn test_hours_patch_replaces_both_ends() {
        let mut seller = Seller::new(
            SellerId(1),
            SellerCreate {
                name: "Warung Bu Tini".to_string(),
                address: "Jl. Kaliurang 5".to_string(),
                phone_number: "0812".to_string(),
                open_hour: 8,
                closed_hour: 21,
            },
        );

        seller
            .on_patch(
                SellerPatch::Hours {
                    open_hour: 17,
                    closed_hour: 2,
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!((seller.open_hour, seller.closed_hour), (17, 2));
        assert_eq!(seller.address, "Jl. Kaliurang 5");
    }
}
