//! # Food Market
//!
//! Ordering core of a food marketplace: sellers publish menus, customers place orders,
//! sellers accept them.
//!
//! ## Core Components
//!
//! - **[allocator]**: [`SequenceAllocator`](allocator::SequenceAllocator) hands out
//!   unique, increasing integer ids from persistent counters.
//! - **[catalog]**: [`CatalogResolver`](catalog::CatalogResolver) validates requested
//!   menu lines against the seller's catalog and prices them.
//! - **[assembler]**: [`OrderAssembler`](assembler::OrderAssembler) builds and stores new
//!   orders.
//! - **[lifecycle]**: [`OrderLifecycle`](lifecycle::OrderLifecycle) moves orders through
//!   their statuses.
//!
//! Storage is one [`ResourceActor`](actor_framework::ResourceActor) per collection
//! (`*_actor` modules) reached through typed [`clients`]. The core only sees the narrow
//! traits in [`store`], so tests can substitute their own doubles.
//!
//! ## Quick Start
//!
//! [`MarketSystem`](runtime::MarketSystem) starts and wires everything; the `food-market`
//! binary walks through registering a seller and a customer, publishing a menu, placing
//! an order and accepting it.

pub mod allocator;
pub mod assembler;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod error;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod runtime;
pub mod seller_actor;
pub mod sequence_actor;
pub mod store;

pub use config::MarketConfig;
pub use error::MarketError;
