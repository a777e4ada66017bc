//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// A customer with this id is already registered.
    #[error("Customer already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
