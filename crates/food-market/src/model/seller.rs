//! A restaurant that publishes menus and fulfils orders.
//!
//! Stored by the [`seller_actor`](crate::seller_actor); mutated only through
//! [`SellerPatch`] operations.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Sellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub u32);

impl From<u32> for SellerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seller_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub seller_id: SellerId,
    pub name: String,
    pub address: String,
    #[serde(rename = "phone-number")]
    pub phone_number: String,
    pub open_hour: i64,
    pub closed_hour: i64,
}

/// Payload for registering a new seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerCreate {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub open_hour: i64,
    pub closed_hour: i64,
}

impl Seller {
    pub fn new(seller_id: SellerId, params: SellerCreate) -> Self {
        Self {
            seller_id,
            name: params.name,
            address: params.address,
            phone_number: params.phone_number,
            open_hour: params.open_hour,
            closed_hour: params.closed_hour,
        }
    }
}

/// Mutations a seller document accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SellerPatch {
    Name(String),
    Address(String),
    PhoneNumber(String),
    Hours { open_hour: i64, closed_hour: i64 },
}
