//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu was not found.
    #[error("Menu not found: {0}")]
    NotFound(String),

    /// A menu with this id is already published.
    #[error("Menu already exists: {0}")]
    AlreadyExists(String),

    /// The menu names a seller that is not registered.
    #[error("Seller not found for menu: {0}")]
    SellerNotFound(String),

    /// Prices must be finite and non-negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
