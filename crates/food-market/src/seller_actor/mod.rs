//! # Seller Actor
//!
//! Owns the `sellers` collection. A seller's address doubles as the pickup
//! (`source_address`) of every order placed with it.

pub mod entity;
pub mod error;

pub use entity::SellerAction;
pub use error::*;

use crate::clients::SellerClient;
use crate::model::Seller;
use actor_framework::ResourceActor;

/// Creates a new Seller actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Seller>, SellerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SellerClient::new(generic_client))
}
