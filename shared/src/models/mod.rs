//! Data models
//!
//! Shared between the store engine and presentation-layer consumers.
//! All IDs are opaque `String` keys (see `util::entity_id`), unique within
//! their collection and never reused after deletion.

pub mod category;
pub mod customer;
pub mod dining_table;
pub mod ingredient;
pub mod loyalty;
pub mod menu_item;
pub mod order;
pub mod purchase_order;
pub mod restaurant;
pub mod review;
pub mod staff;
pub mod website;

// Re-exports
pub use category::*;
pub use customer::*;
pub use dining_table::*;
pub use ingredient::*;
pub use loyalty::*;
pub use menu_item::*;
pub use order::*;
pub use purchase_order::*;
pub use restaurant::*;
pub use review::*;
pub use staff::*;
pub use website::*;
