use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A registered buyer. Its address is the default delivery address of its orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    #[serde(rename = "customer_name")]
    pub name: String,
    #[serde(rename = "customer_address")]
    pub address: String,
}

/// Payload for registering a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(customer_id: CustomerId, params: CustomerCreate) -> Self {
        Self {
            customer_id,
            name: params.name,
            address: params.address,
        }
    }
}

/// Mutations a customer document accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CustomerPatch {
    Name(String),
    Address(String),
}
