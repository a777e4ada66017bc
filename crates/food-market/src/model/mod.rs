//! Documents stored by the marketplace actors, their typed ids, creation payloads and patches.

pub mod customer;
pub mod menu;
pub mod order;
pub mod seller;
pub mod sequence;

pub use customer::*;
pub use menu::*;
pub use order::*;
pub use seller::*;
pub use sequence::*;
