//! Typed clients, one per collection, wrapping
//! [`ResourceClient`](actor_framework::ResourceClient).

pub mod customer_client;
pub mod macros;
pub mod menu_client;
pub mod order_client;
pub mod seller_client;
pub mod sequence_client;

pub use customer_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use seller_client::*;
pub use sequence_client::*;
