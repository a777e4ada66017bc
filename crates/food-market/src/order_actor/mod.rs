//! # Order Actor
//!
//! Owns the `orders` collection. Orders arrive fully assembled (identifier, priced
//! lines, totals, initial status) and afterwards change only through conditional
//! status patches.

pub mod entity;
pub mod error;

pub use entity::OrderAction;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
