//! Error types for the Seller actor.

use thiserror::Error;

/// Errors that can occur during seller operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SellerError {
    /// The requested seller was not found.
    #[error("Seller not found: {0}")]
    NotFound(String),

    /// A seller with this id is already registered.
    #[error("Seller already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
