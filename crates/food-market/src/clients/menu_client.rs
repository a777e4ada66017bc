//! # Menu Client
//!
//! Typed access to the `menus` collection. Also serves as the production
//! [`MenuCatalog`] behind the catalog resolver.
use crate::menu_actor::MenuError;
use crate::model::{Menu, MenuId};
use crate::store::MenuCatalog;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Menu>,
}

crate::impl_basic_client!(MenuClient, Menu, MenuError, menu);

#[async_trait]
impl MenuCatalog for MenuClient {
    async fn find_menu_by_id(&self, id: MenuId) -> Result<Option<Menu>, MenuError> {
        self.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SellerId;
    use actor_framework::FrameworkError;

    #[tokio::test]
    async fn test_typed_entity_error_survives_the_channel() {
        let mut mock = actor_framework::mock::MockClient::<Menu>::new();
        mock.expect_insert()
            .return_err(FrameworkError::EntityError(Box::new(
                MenuError::SellerNotFound("seller_7".to_string()),
            )));
        let client = MenuClient::new(mock.client());

        let menu = Menu {
            menu_id: MenuId(1),
            seller_id: SellerId(7),
            name: "Bakpia".to_string(),
            description: String::new(),
            price: 3.0,
            calorie: 150.0,
            image_url: String::new(),
        };
        let err = client.insert(menu).await.unwrap_err();
        assert_eq!(err, MenuError::SellerNotFound("seller_7".to_string()));
    }
}
