//! # Sequence Client
//!
//! Typed access to the counter rows, and the production [`SequenceStore`].
use crate::model::{Sequence, SequenceKey};
use crate::sequence_actor::{SequenceAction, SequenceError};
use crate::store::SequenceStore;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Sequence actor.
#[derive(Clone)]
pub struct SequenceClient {
    inner: ResourceClient<Sequence>,
}

crate::impl_client_new!(SequenceClient, Sequence);

#[async_trait]
impl ActorClient<Sequence> for SequenceClient {
    type Error = SequenceError;

    fn inner(&self) -> &ResourceClient<Sequence> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> SequenceError {
        match e {
            FrameworkError::NotFound(key) => SequenceError::NotFound(key),
            FrameworkError::AlreadyExists(key) => SequenceError::Conflict(key),
            FrameworkError::EntityError(inner) => match inner.downcast::<SequenceError>() {
                Ok(typed) => *typed,
                Err(other) => SequenceError::ActorCommunicationError(other.to_string()),
            },
            other => SequenceError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SequenceClient {
    /// Increments an existing row.
    #[instrument(skip(self))]
    pub async fn increment(&self, key: SequenceKey) -> Result<u32, SequenceError> {
        debug!("Sending request");
        self.inner
            .perform_action(key, SequenceAction::Increment)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl SequenceStore for SequenceClient {
    async fn find_sequence(&self, key: &SequenceKey) -> Result<Option<u32>, SequenceError> {
        Ok(self.get(key.clone()).await?.map(|row| row.value))
    }

    /// Increments the row for `key`, creating it at zero on first use.
    async fn increment_sequence(&self, key: &SequenceKey) -> Result<u32, SequenceError> {
        match self.increment(key.clone()).await {
            Err(SequenceError::NotFound(_)) => {}
            other => return other,
        }

        // Another caller may have created the row in the meantime.
        match self.insert(Sequence::new(key.clone())).await {
            Ok(_) | Err(SequenceError::Conflict(_)) => {}
            Err(e) => return Err(e),
        }

        match self.increment(key.clone()).await {
            Err(SequenceError::NotFound(key)) => Err(SequenceError::Conflict(key)),
            other => other,
        }
    }
}
