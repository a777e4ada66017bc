//! # Actor Framework
//!
//! Building blocks for in-process document stores built on the **Actor Model**: one
//! Tokio task per collection owns that collection's documents and serves requests one at
//! a time. Sequential processing is what makes every single-document operation atomic,
//! including read-modify-write operations such as incrementing a counter or moving an
//! order from one status to the next, without any locks.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the document type, its typed patches and actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the document store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, open: bool }
//!
//! #[derive(Debug)] enum TicketPatch { Close }
//! #[derive(Debug)] enum TicketAction {}
//! #[derive(Debug, thiserror::Error)]
//! #[error("ticket already closed")]
//! struct AlreadyClosed;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Patch = TicketPatch;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = AlreadyClosed;
//!
//!     fn id(&self) -> u32 { self.id }
//!
//!     async fn on_patch(&mut self, patch: TicketPatch, _: &()) -> Result<(), AlreadyClosed> {
//!         match patch {
//!             TicketPatch::Close if !self.open => Err(AlreadyClosed),
//!             TicketPatch::Close => { self.open = false; Ok(()) }
//!         }
//!     }
//!
//!     async fn handle_action(&mut self, a: TicketAction, _: &()) -> Result<(), AlreadyClosed> {
//!         match a {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.insert(Ticket { id: 1, open: true }).await.unwrap();
//!     assert!(client.patch(1, TicketPatch::Close).await.is_ok());
//!
//!     // The second close is rejected inside the actor; the typed error survives.
//!     let err = client.patch(1, TicketPatch::Close).await.unwrap_err();
//!     assert!(err.entity_error::<AlreadyClosed>().is_some());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor is *run*, not when it is created. An actor
//! whose documents reference another collection receives that collection's client as
//! its `Context` and can validate references in [`ActorEntity::on_insert`]. Because all
//! actors are created first and wired second, construction order never matters.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so
//! code that consumes a client can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
