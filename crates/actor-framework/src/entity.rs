//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored document (Seller, Menu, Order,
//! Sequence, …) implements to be managed by the generic `ResourceActor`. It names the
//! identifier, the typed patch operations, the custom actions, the injected context and
//! the error type, and provides the hooks the actor calls while serving requests.
//!
//! # Identifiers come from outside
//!
//! The actor does not mint identifiers. Documents arrive fully formed (their id already
//! allocated by whoever built them) and the actor only refuses duplicates. This keeps the
//! allocation policy, e.g. a persistent counter, out of the storage layer.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_insert`] runs before a new document is stored.
//!
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored document must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g. asking
/// another actor whether a referenced document exists). The `Context` type is injected
/// into every hook, so dependencies are bound when the actor is *run*, not when it is
/// constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this document.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Closed set of field mutations this document accepts.
    ///
    /// A patch is an enum rather than a key/value pair so the compiler decides which
    /// fields are mutable and with what value type.
    type Patch: Send + Sync + Debug;

    /// Enum representing document-specific operations (e.g. `Increment`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this document.
    ///
    /// One enum per actor, not one per message: callers match on a single type and the
    /// framework boxes it into [`FrameworkError::EntityError`](crate::FrameworkError)
    /// so it can be recovered by downcasting on the client side.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key under which this document is stored.
    fn id(&self) -> Self::Id;

    /// Called before a new document is stored.
    /// Use this hook to validate references to other actors.
    async fn on_insert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a typed patch. Returning an error leaves the stored document untouched.
    async fn on_patch(&mut self, patch: Self::Patch, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Handle a custom document-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
