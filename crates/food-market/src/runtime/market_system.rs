use crate::allocator::SequenceAllocator;
use crate::assembler::OrderAssembler;
use crate::catalog::CatalogResolver;
use crate::clients::{CustomerClient, MenuClient, OrderClient, SellerClient, SequenceClient};
use crate::config::MarketConfig;
use crate::customer_actor::{self, CustomerError};
use crate::error::MarketError;
use crate::lifecycle::OrderLifecycle;
use crate::menu_actor::{self, MenuError};
use crate::model::{
    Customer, CustomerCreate, CustomerId, CustomerPatch, EntityKind, Menu, MenuCreate, MenuId,
    MenuPatch, Order, OrderBody, OrderId, OrderRequest, Seller, SellerCreate, SellerId,
    SellerPatch,
};
use crate::order_actor;
use crate::seller_actor::{self, SellerError};
use crate::sequence_actor;
use actor_framework::ActorClient;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument};

/// The runtime orchestrator for the marketplace.
///
/// `MarketSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping one actor per collection
/// - **Dependency Wiring**: the Menu actor runs with a `SellerClient` so menus can only be
///   published for registered sellers
/// - **Identifier Allocation**: every document id comes from the shared
///   [`SequenceAllocator`]
///
/// # Example
///
/// ```rust,ignore
/// let system = MarketSystem::new(MarketConfig::from_env());
///
/// let seller = system.register_seller(seller_params).await?;
/// let menu = system.publish_menu(menu_params).await?;
/// let order = system.place_order(body).await?;
/// system.accept_order(order.order_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct MarketSystem {
    pub sequence_client: SequenceClient,
    pub seller_client: SellerClient,
    pub customer_client: CustomerClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,

    pub allocator: SequenceAllocator,
    assembler: OrderAssembler,
    lifecycle: OrderLifecycle,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl MarketSystem {
    /// Spawns every actor and wires the core components on top of their clients.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: MarketConfig) -> Self {
        let buffer = config.channel_buffer;

        let (sequence_actor, sequence_client) = sequence_actor::new(buffer);
        let sequence_handle = tokio::spawn(sequence_actor.run(()));

        let (seller_actor, seller_client) = seller_actor::new(buffer);
        let seller_handle = tokio::spawn(seller_actor.run(()));

        let (customer_actor, customer_client) = customer_actor::new(buffer);
        let customer_handle = tokio::spawn(customer_actor.run(()));

        // Menus validate their seller on insert.
        let (menu_actor, menu_client) = menu_actor::new(buffer);
        let menu_handle = tokio::spawn(menu_actor.run(seller_client.clone()));

        let (order_actor, order_client) = order_actor::new(buffer);
        let order_handle = tokio::spawn(order_actor.run(()));

        let allocator = SequenceAllocator::new(sequence_client.clone(), &config);
        let assembler = OrderAssembler::new(
            CatalogResolver::new(menu_client.clone()),
            allocator.clone(),
            order_client.clone(),
        );
        let lifecycle = OrderLifecycle::new(order_client.clone());

        info!(?config, "Market system started");

        Self {
            sequence_client,
            seller_client,
            customer_client,
            menu_client,
            order_client,
            allocator,
            assembler,
            lifecycle,
            // The seller actor outlives the menu actor, which holds a seller client.
            handles: vec![
                sequence_handle,
                customer_handle,
                order_handle,
                menu_handle,
                seller_handle,
            ],
        }
    }

    // =====================================================================
    // Sellers, customers, menus
    // =====================================================================

    #[instrument(skip(self))]
    pub async fn register_seller(&self, params: SellerCreate) -> Result<Seller, MarketError> {
        let seller_id = SellerId(self.allocator.next_for(EntityKind::Seller).await?);
        self.seller_client
            .insert(Seller::new(seller_id, params))
            .await
            .map_err(|e| persistence(seller_id, e))
    }

    #[instrument(skip(self))]
    pub async fn register_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<Customer, MarketError> {
        let customer_id = CustomerId(self.allocator.next_for(EntityKind::Customer).await?);
        self.customer_client
            .insert(Customer::new(customer_id, params))
            .await
            .map_err(|e| persistence(customer_id, e))
    }

    /// Publishes a menu for an existing seller.
    #[instrument(skip(self))]
    pub async fn publish_menu(&self, params: MenuCreate) -> Result<Menu, MarketError> {
        let seller_id = params.seller_id;
        let menu_id = MenuId(self.allocator.next_for(EntityKind::Menu).await?);
        self.menu_client
            .insert(Menu::new(menu_id, params))
            .await
            .map_err(|e| match e {
                MenuError::SellerNotFound(_) => MarketError::SellerNotFound(seller_id),
                other => persistence(menu_id, other),
            })
    }

    pub async fn update_seller(
        &self,
        seller_id: SellerId,
        patch: SellerPatch,
    ) -> Result<Seller, MarketError> {
        self.seller_client
            .update_seller(seller_id, patch)
            .await
            .map_err(|e| match e {
                SellerError::NotFound(_) => MarketError::SellerNotFound(seller_id),
                other => persistence(seller_id, other),
            })
    }

    pub async fn update_customer(
        &self,
        customer_id: CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, MarketError> {
        self.customer_client
            .update_customer(customer_id, patch)
            .await
            .map_err(|e| match e {
                CustomerError::NotFound(_) => MarketError::CustomerNotFound(customer_id),
                other => persistence(customer_id, other),
            })
    }

    pub async fn update_menu(&self, menu_id: MenuId, patch: MenuPatch) -> Result<Menu, MarketError> {
        self.menu_client
            .update_menu(menu_id, patch)
            .await
            .map_err(|e| match e {
                MenuError::NotFound(_) => MarketError::MenuNotFound(menu_id),
                other => persistence(menu_id, other),
            })
    }

    // =====================================================================
    // Orders
    // =====================================================================

    /// Creates an order with explicit pickup and delivery addresses.
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order, MarketError> {
        self.assembler.create(request).await
    }

    /// Creates an order picked up at the seller's address and delivered to the
    /// customer's address.
    #[instrument(skip(self, body), fields(customer_id = %body.customer_id, seller_id = %body.seller_id))]
    pub async fn place_order(&self, body: OrderBody) -> Result<Order, MarketError> {
        let seller = self
            .seller_client
            .get(body.seller_id)
            .await
            .map_err(|e| persistence(body.seller_id, e))?
            .ok_or(MarketError::SellerNotFound(body.seller_id))?;
        let customer = self
            .customer_client
            .get(body.customer_id)
            .await
            .map_err(|e| persistence(body.customer_id, e))?
            .ok_or(MarketError::CustomerNotFound(body.customer_id))?;

        self.create_order(OrderRequest {
            customer_id: customer.customer_id,
            seller_id: seller.seller_id,
            source_address: seller.address,
            delivery_address: customer.address,
            lines: body.menus,
        })
        .await
    }

    pub async fn find_order(&self, order_id: OrderId) -> Result<Option<Order>, MarketError> {
        self.order_client
            .get(order_id)
            .await
            .map_err(|e| MarketError::OrderPersistence {
                order_id,
                reason: e.to_string(),
            })
    }

    pub async fn accept_order(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.lifecycle.accept(order_id).await
    }

    pub async fn reject_order(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.lifecycle.reject(order_id).await
    }

    pub async fn cancel_order(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.lifecycle.cancel(order_id).await
    }

    pub async fn complete_order(&self, order_id: OrderId) -> Result<Order, MarketError> {
        self.lifecycle.complete(order_id).await
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client closes the actors' channels; each actor then drains and
    /// exits its loop. Returns the first actor task that panicked, if any.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.assembler);
        drop(self.lifecycle);
        drop(self.allocator);
        drop(self.sequence_client);
        drop(self.seller_client);
        drop(self.customer_client);
        drop(self.menu_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn persistence(entity: impl std::fmt::Display, e: impl std::fmt::Display) -> MarketError {
    MarketError::EntityPersistence {
        entity: entity.to_string(),
        reason: e.to_string(),
    }
}
