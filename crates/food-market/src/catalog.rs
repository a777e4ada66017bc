//! # Catalog Resolver
//!
//! Turns requested `(menu_id, quantity)` pairs into priced [`OrderLine`]s for one
//! seller. Read-only: it can be called any number of times, concurrently, without side
//! effects.

use crate::clients::MenuClient;
use crate::error::MarketError;
use crate::model::{OrderLine, OrderLineRequest, SellerId};
use crate::store::MenuCatalog;
use tracing::{debug, instrument, warn};

/// Validates and prices order lines against a [`MenuCatalog`].
#[derive(Clone)]
pub struct CatalogResolver<C = MenuClient> {
    catalog: C,
}

impl<C: MenuCatalog> CatalogResolver<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Resolves `lines` in input order, failing on the first line that is unknown,
    /// owned by another seller, or has a zero quantity.
    ///
    /// On success the result has exactly one line per request, in request order.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn resolve(
        &self,
        seller_id: SellerId,
        lines: &[OrderLineRequest],
    ) -> Result<Vec<OrderLine>, MarketError> {
        let mut resolved = Vec::with_capacity(lines.len());

        for request in lines {
            let menu_id = request.menu_id;
            let menu = self
                .catalog
                .find_menu_by_id(menu_id)
                .await
                .map_err(|e| MarketError::CatalogPersistence {
                    menu_id,
                    reason: e.to_string(),
                })?
                .ok_or(MarketError::MenuNotFound(menu_id))?;

            if menu.seller_id != seller_id {
                warn!(%menu_id, owner = %menu.seller_id, "Menu sold by another seller");
                return Err(MarketError::MenuSellerMismatch { menu_id, seller_id });
            }
            if request.quantity == 0 {
                return Err(MarketError::InvalidQuantity(menu_id));
            }

            resolved.push(OrderLine::new(menu, request.quantity));
        }

        debug!(count = resolved.len(), "Resolved");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Menu, MenuId};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    fn menu(id: u32, seller: u32, price: f64) -> Menu {
        Menu {
            menu_id: MenuId(id),
            seller_id: SellerId(seller),
            name: format!("menu {id}"),
            description: String::new(),
            price,
            calorie: 0.0,
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_lines_keep_request_order() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get(MenuId(2)).return_ok(Some(menu(2, 1, 4.0)));
        mock.expect_get(MenuId(1)).return_ok(Some(menu(1, 1, 12.5)));
        let resolver = CatalogResolver::new(MenuClient::new(mock.client()));

        let lines = resolver
            .resolve(
                SellerId(1),
                &[
                    OrderLineRequest::new(MenuId(2), 2),
                    OrderLineRequest::new(MenuId(1), 3),
                ],
            )
            .await
            .unwrap();

        let ids: Vec<_> = lines.iter().map(|l| l.menu_id).collect();
        assert_eq!(ids, vec![MenuId(2), MenuId(1)]);
        assert_eq!(lines[0].line_total, 8.0);
        assert_eq!(lines[1].line_total, 37.5);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_menu() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get(MenuId(9)).return_ok(None);
        let resolver = CatalogResolver::new(MenuClient::new(mock.client()));

        let result = resolver
            .resolve(SellerId(1), &[OrderLineRequest::new(MenuId(9), 1)])
            .await;
        assert_eq!(result, Err(MarketError::MenuNotFound(MenuId(9))));
    }

    #[tokio::test]
    async fn test_menu_of_other_seller() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get(MenuId(1)).return_ok(Some(menu(1, 2, 12.5)));
        let resolver = CatalogResolver::new(MenuClient::new(mock.client()));

        let result = resolver
            .resolve(SellerId(1), &[OrderLineRequest::new(MenuId(1), 3)])
            .await;
        assert_eq!(
            result,
            Err(MarketError::MenuSellerMismatch {
                menu_id: MenuId(1),
                seller_id: SellerId(1)
            })
        );
    }

    #[tokio::test]
    async fn test_zero_quantity_stops_resolution() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get(MenuId(1)).return_ok(Some(menu(1, 1, 12.5)));
        let resolver = CatalogResolver::new(MenuClient::new(mock.client()));

        let result = resolver
            .resolve(
                SellerId(1),
                &[
                    OrderLineRequest::new(MenuId(1), 0),
                    OrderLineRequest::new(MenuId(2), 1),
                ],
            )
            .await;
        assert_eq!(result, Err(MarketError::InvalidQuantity(MenuId(1))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_read_failure_is_catalog_persistence() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get(MenuId(1))
            .return_err(FrameworkError::ActorClosed);
        let resolver = CatalogResolver::new(MenuClient::new(mock.client()));

        let result = resolver
            .resolve(SellerId(1), &[OrderLineRequest::new(MenuId(1), 1)])
            .await;
        assert!(matches!(
            result,
            Err(MarketError::CatalogPersistence {
                menu_id: MenuId(1),
                ..
            })
        ));
    }
}
