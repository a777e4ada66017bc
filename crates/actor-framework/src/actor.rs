//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer for one collection of
//! documents. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the document store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of documents.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Each instance processes its own messages *sequentially*,
/// so every request is atomic with respect to every other request on the same
/// collection without a `Mutex` around the `store`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] enum NotePatch { Text(String) }
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Patch = NotePatch;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> u32 { self.id }
///     async fn on_patch(&mut self, patch: NotePatch, _: &()) -> Result<(), NoteError> {
///         match patch { NotePatch::Text(text) => self.text = text }
///         Ok(())
///     }
///     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<(), NoteError> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.insert(Note { id: 7, text: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 7);
///     assert!(client.insert(note).await.is_err());
/// }
/// ```
///
/// # Operations
///
/// * **Insert**: refuses ids already present, runs `on_insert`, stores the document and
///   returns the stored copy.
/// * **Get**: returns a clone of the document, or `None`.
/// * **Patch**: applies `on_patch` to a working copy and commits it only on success, so
///   a rejected patch leaves the stored document untouched.
/// * **Action**: runs `handle_action` against the stored document and returns its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel; when it is full, callers wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Menu" instead of "food_market::model::menu::Menu")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert { item, respond_to } => {
                    let id = item.id();
                    debug!(entity_type, %id, "Insert");
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    let mut item = item;
                    if let Err(e) = item.on_insert(&context).await {
                        warn!(entity_type, %id, error = %e, "on_insert failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Inserted");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Patch");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = item.clone();
                    if let Err(e) = candidate.on_patch(patch, &context).await {
                        warn!(entity_type, %id, error = %e, "Patch rejected");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = candidate;
                    info!(entity_type, %id, "Patched");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
