//! # Sequence Actor
//!
//! Single writer for the counter rows that back integer identifiers. Because the actor
//! serves one request at a time, [`SequenceAction::Increment`] is atomic with respect to
//! every other caller on the same key: two callers can never observe the same value.
//!
//! Rows are created lazily by the [`SequenceClient`](crate::clients::SequenceClient) the
//! first time a key is incremented.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::SequenceClient;
use crate::model::Sequence;
use actor_framework::ResourceActor;

/// Creates a new Sequence actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Sequence>, SequenceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SequenceClient::new(generic_client))
}
