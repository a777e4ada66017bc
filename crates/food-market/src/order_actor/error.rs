//! Error types for the Order actor.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur while storing or updating orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderStoreError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order with this id is already stored.
    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    /// The stored status did not permit the requested change.
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
