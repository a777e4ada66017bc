//! # Order Assembler
//!
//! Builds a priced order from a request and stores it. The steps run in a fixed order
//! so that nothing is allocated or written for a request that fails validation:
//!
//! 1. reject an empty line list;
//! 2. resolve and price every line through the [`CatalogResolver`];
//! 3. sum the line totals;
//! 4. allocate the order identifier;
//! 5. set the initial status and hand the order to the [`OrderStore`].

use crate::allocator::SequenceAllocator;
use crate::catalog::CatalogResolver;
use crate::clients::{MenuClient, OrderClient, SequenceClient};
use crate::error::MarketError;
use crate::model::{EntityKind, Order, OrderId, OrderRequest, OrderStatus};
use crate::store::{MenuCatalog, OrderStore, SequenceStore};
use tracing::{info, instrument, warn};

/// Assembles and persists new orders.
#[derive(Clone)]
pub struct OrderAssembler<C = MenuClient, S = SequenceClient, O = OrderClient> {
    catalog: CatalogResolver<C>,
    allocator: SequenceAllocator<S>,
    orders: O,
}

impl<C, S, O> OrderAssembler<C, S, O>
where
    C: MenuCatalog,
    S: SequenceStore,
    O: OrderStore,
{
    pub fn new(catalog: CatalogResolver<C>, allocator: SequenceAllocator<S>, orders: O) -> Self {
        Self {
            catalog,
            allocator,
            orders,
        }
    }

    /// Creates an order in status `created` and returns the stored copy.
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, seller_id = %request.seller_id))]
    pub async fn create(&self, request: OrderRequest) -> Result<Order, MarketError> {
        if request.lines.is_empty() {
            return Err(MarketError::EmptyOrder {
                customer_id: request.customer_id,
                seller_id: request.seller_id,
            });
        }

        let lines = self
            .catalog
            .resolve(request.seller_id, &request.lines)
            .await?;
        let total_price = lines.iter().map(|line| line.line_total).sum::<f64>();

        let order_id = OrderId(self.allocator.next_for(EntityKind::Order).await?);
        let order = Order {
            order_id,
            customer_id: request.customer_id,
            seller_id: request.seller_id,
            source_address: request.source_address,
            delivery_address: request.delivery_address,
            lines,
            total_price,
            status: OrderStatus::INITIAL,
        };

        match self.orders.insert_order(order).await {
            Ok(stored) => {
                info!(%order_id, total_price, "Order created");
                Ok(stored)
            }
            Err(e) => {
                warn!(%order_id, error = %e, "Order could not be stored");
                Err(MarketError::OrderPersistence {
                    order_id,
                    reason: e.to_string(),
                })
            }
        }
    }
}
