//! # Customer Actor
//!
//! Owns the `customers` collection. The stored address is the default
//! `delivery_address` for orders the customer places.

pub mod entity;
pub mod error;

pub use entity::CustomerAction;
pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use actor_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
