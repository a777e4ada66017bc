//! # System Lifecycle & Orchestration
//!
//! Starts one actor per collection, wires them together and exposes the marketplace
//! operations on top of the resulting clients.

pub mod market_system;

pub use market_system::MarketSystem;
