//! Error types for the Sequence actor.

use thiserror::Error;

/// Errors that can occur while reading or advancing a counter row.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
    /// No row exists for the key.
    #[error("Sequence not found: {0}")]
    NotFound(String),

    /// A concurrent writer got in the way; the operation may be retried.
    #[error("Sequence write conflict: {0}")]
    Conflict(String),

    /// The row reached the largest representable value.
    #[error("Sequence exhausted: {0}")]
    Exhausted(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
