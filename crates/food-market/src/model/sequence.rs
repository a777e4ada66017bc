//! Counter documents backing integer identifiers.
//!
//! The document store has no auto-increment, so every collection draws its ids from a
//! named counter row. One row exists per `(collection, identifier)` pair and it only ever
//! moves forward.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Names one counter row, e.g. `counters/order_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceKey {
    pub collection: String,
    pub identifier: String,
}

impl SequenceKey {
    pub fn new(collection: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            identifier: identifier.into(),
        }
    }
}

impl Display for SequenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.identifier)
    }
}

/// The kinds of documents that draw identifiers from a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Seller,
    Customer,
    Menu,
    Order,
}

impl EntityKind {
    /// Field name the counter is kept under.
    pub fn identifier(self) -> &'static str {
        match self {
            EntityKind::Seller => "seller_id",
            EntityKind::Customer => "customer_id",
            EntityKind::Menu => "menu_id",
            EntityKind::Order => "order_id",
        }
    }

    pub fn sequence_key(self, collection: &str) -> SequenceKey {
        SequenceKey::new(collection, self.identifier())
    }
}

/// A counter row: the last value handed out for its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub key: SequenceKey,
    pub value: u32,
}

impl Sequence {
    /// A row that has not issued anything yet. The first increment yields 1.
    pub fn new(key: SequenceKey) -> Self {
        Self { key, value: 0 }
    }
}
