//! # Generic Messages
//!
//! Request types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation on one document.
///
/// Every variant addresses a single document, which is what makes each operation atomic:
/// the actor serves one message at a time and owns the only copy of its store.
///
/// - **Insert**: Store a fully built document. Fails if its id is already taken.
/// - **Get**: Fetch the current state of a document by id.
/// - **Patch**: Apply a typed [`ActorEntity::Patch`] to an existing document.
/// - **Action**: Execute a custom [`ActorEntity::Action`] and return its result.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Insert {
        item: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
