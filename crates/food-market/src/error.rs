//! Errors surfaced by the ordering core.

use crate::model::{CustomerId, MenuId, OrderId, OrderStatus, SellerId, SequenceKey};
use thiserror::Error;

/// Every failure the marketplace operations report. Each variant names the document
/// it concerns.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketError {
    /// The counter could not be advanced (store unreachable, conflicts outlasted the
    /// retry budget, or the counter is exhausted).
    #[error("Sequence {key} could not be advanced: {reason}")]
    SequencePersistence { key: SequenceKey, reason: String },

    #[error("Menu not found: {0}")]
    MenuNotFound(MenuId),

    /// The menu exists but belongs to a different seller than the order.
    #[error("Menu {menu_id} is not sold by {seller_id}")]
    MenuSellerMismatch { menu_id: MenuId, seller_id: SellerId },

    #[error("Invalid quantity for {0}")]
    InvalidQuantity(MenuId),

    #[error("Order from {customer_id} to {seller_id} has no line items")]
    EmptyOrder {
        customer_id: CustomerId,
        seller_id: SellerId,
    },

    /// Reading the catalog failed.
    #[error("Catalog lookup for {menu_id} failed: {reason}")]
    CatalogPersistence { menu_id: MenuId, reason: String },

    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Reading or writing the order store failed.
    #[error("Order store failed for {order_id}: {reason}")]
    OrderPersistence { order_id: OrderId, reason: String },

    #[error("Seller not found: {0}")]
    SellerNotFound(SellerId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Registering or updating a seller, customer or menu failed.
    #[error("Could not store {entity}: {reason}")]
    EntityPersistence { entity: String, reason: String },
}
