//! A dish offered by exactly one seller.
//!
//! Menus are created by their seller and are read-only to the ordering flow: an
//! [`OrderLine`](crate::model::OrderLine) keeps a snapshot of the menu as it was priced.

use crate::model::SellerId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub u32);

impl From<u32> for MenuId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub menu_id: MenuId,
    pub seller_id: SellerId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub calorie: f64,
    pub image_url: String,
}

/// Payload for publishing a new menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub seller_id: SellerId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub calorie: f64,
    pub image_url: String,
}

impl Menu {
    pub fn new(menu_id: MenuId, params: MenuCreate) -> Self {
        Self {
            menu_id,
            seller_id: params.seller_id,
            name: params.name,
            description: params.description,
            price: params.price,
            calorie: params.calorie,
            image_url: params.image_url,
        }
    }
}

/// Mutations a menu document accepts. Ownership (`seller_id`) is not among them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MenuPatch {
    Name(String),
    Description(String),
    Price(f64),
    Calorie(f64),
    ImageUrl(String),
}
