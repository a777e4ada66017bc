//! # Menu Actor
//!
//! Owns the `menus` collection. Each menu belongs to exactly one seller; ownership is
//! fixed at publication and checked against the Seller actor, which is injected when
//! the actor is run:
//!
//! ```rust,ignore
//! let (menu_actor, menu_client) = menu_actor::new(32);
//! tokio::spawn(menu_actor.run(seller_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use entity::MenuAction;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::Menu;
use actor_framework::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Menu>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
