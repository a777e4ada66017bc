//! [`ActorEntity`] implementation for [`Menu`].
//!
//! The Menu actor runs with a [`SellerClient`] as its context so a menu can only be
//! published for a seller that exists.

use super::error::MenuError;
use crate::clients::SellerClient;
use crate::model::{Menu, MenuId, MenuPatch};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;

/// Menus have no custom actions.
#[derive(Debug, Clone, Copy)]
pub enum MenuAction {}

fn check_price(price: f64) -> Result<(), MenuError> {
    if !price.is_finite() || price < 0.0 {
        return Err(MenuError::InvalidPrice(price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Patch = MenuPatch;
    type Action = MenuAction;
    type ActionResult = ();
    type Context = SellerClient;
    type Error = MenuError;

    fn id(&self) -> MenuId {
        self.menu_id
    }

    /// Validates the price and that the owning seller is registered.
    async fn on_insert(&mut self, sellers: &SellerClient) -> Result<(), MenuError> {
        check_price(self.price)?;
        match sellers.get(self.seller_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(MenuError::SellerNotFound(self.seller_id.to_string())),
            Err(e) => Err(MenuError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn on_patch(&mut self, patch: MenuPatch, _ctx: &SellerClient) -> Result<(), MenuError> {
        match patch {
            MenuPatch::Name(name) => self.name = name,
            MenuPatch::Description(description) => self.description = description,
            MenuPatch::Price(price) => {
                check_price(price)?;
                self.price = price;
            }
            MenuPatch::Calorie(calorie) => self.calorie = calorie,
            MenuPatch::ImageUrl(image_url) => self.image_url = image_url,
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &SellerClient,
    ) -> Result<(), MenuError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuCreate, Seller, SellerCreate, SellerId};
    use actor_framework::mock::MockClient;

    fn menu(seller_id: u32, price: f64) -> Menu {
        Menu::new(
            MenuId(1),
            MenuCreate {
                seller_id: SellerId(seller_id),
                name: "Gudeg".to_string(),
                description: "Young jackfruit stew".to_string(),
                price,
                calorie: 420.0,
                image_url: String::new(),
            },
        )
    }

    fn seller(id: u32) -> Seller {
        Seller::new(
            SellerId(id),
            SellerCreate {
                name: "Gudeg Yu Djum".to_string(),
                address: "Wijilan".to_string(),
                phone_number: "0274".to_string(),
                open_hour: 6,
                closed_hour: 22,
            },
        )
    }

    #[tokio::test]
    async fn test_insert_checks_seller_exists() {
        let mut mock = MockClient::<Seller>::new();
        mock.expect_get(SellerId(4)).return_ok(Some(seller(4)));
        mock.expect_get(SellerId(9)).return_ok(None);
        let sellers = SellerClient::new(mock.client());

        assert!(menu(4, 15000.0).on_insert(&sellers).await.is_ok());
        assert_eq!(
            menu(9, 15000.0).on_insert(&sellers).await,
            Err(MenuError::SellerNotFound("seller_9".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_negative_price_rejected_before_lookup() {
        let mock = MockClient::<Seller>::new();
        let sellers = SellerClient::new(mock.client());

        assert_eq!(
            menu(4, -1.0).on_insert(&sellers).await,
            Err(MenuError::InvalidPrice(-1.0))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_price_patch_validated() {
        let mock = MockClient::<Seller>::new();
        let sellers = SellerClient::new(mock.client());
        let mut m = menu(4, 10.0);

        assert!(m.on_patch(MenuPatch::Price(f64::NAN), &sellers).await.is_err());
        m.on_patch(MenuPatch::Price(12.5), &sellers).await.unwrap();
        assert_eq!(m.price, 12.5);
    }
}
