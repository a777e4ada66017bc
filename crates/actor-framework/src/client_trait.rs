//! # ActorClient Trait
//!
//! Common interface for collection-specific clients: default `get` and `insert` built on
//! top of a generic `ResourceClient`, with framework errors translated into the
//! collection's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard document operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] enum TagPatch {}
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)]
/// enum TagError {
///     #[error("tag exists: {0}")] Duplicate(String),
///     #[error("tag store unavailable: {0}")] Unavailable(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32; type Patch = TagPatch; type Action = TagAction;
///     type ActionResult = (); type Context = (); type Error = TagError;
///     fn id(&self) -> u32 { self.id }
///     async fn on_patch(&mut self, p: TagPatch, _: &()) -> Result<(), TagError> { match p {} }
///     async fn handle_action(&mut self, a: TagAction, _: &()) -> Result<(), TagError> { match a {} }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError {
///         match e {
///             FrameworkError::AlreadyExists(id) => TagError::Duplicate(id),
///             other => TagError::Unavailable(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get() and insert() are provided automatically
///     let _ = client.insert(Tag { id: 1 }).await;
///     let _ = client.get(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the collection-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Store a new document and return the stored copy.
    #[tracing::instrument(skip(self, item), fields(id = %item.id()))]
    async fn insert(&self, item: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().insert(item).await.map_err(Self::map_error)
    }
}
