//! Mesa Store - in-process data layer for the restaurant platform
//!
//! # Architecture
//!
//! The store is the single source of truth for every domain collection.
//! All state lives behind one coarse lock; every operation reads and
//! writes under a single guard so no caller can observe a partial
//! mutation (several operations touch more than one collection).
//!
//! # Module structure
//!
//! ```text
//! mesa-store/src/
//! ├── config.rs      # Env-overridable platform settings
//! ├── seed.rs        # Demo dataset loaded at construction
//! ├── store/         # RestaurantStore and per-domain operation sets
//! │   ├── catalog    # Categories, menu items, promotions
//! │   ├── tables     # Dining tables
//! │   ├── staff      # Staff roster
//! │   ├── orders     # Order lifecycle
//! │   ├── inventory  # Ingredients, recipe links, stock deduction
//! │   ├── purchasing # Purchase orders and receiving
//! │   ├── crm        # Customers and feedback
//! │   ├── reviews    # Public reviews and moderation
//! │   ├── loyalty    # Points balances and ledger
//! │   ├── website    # Microsite settings, images, QR URL
//! │   └── visitors   # Page-visit tracking
//! └── utils/         # Logging setup
//! ```
//!
//! # Failure semantics
//!
//! Update/delete against a missing id is a silent no-op, never an error.
//! The one checked failure in the whole store is
//! [`RestaurantStore::redeem_loyalty_points`], which returns `false`
//! when the balance is missing or insufficient. Callers must not assume
//! missing records are signalled any other way.

pub mod config;
mod seed;
pub mod store;
pub mod utils;

// Re-export public types
pub use config::StoreConfig;
pub use store::{CollectionVersions, RestaurantStore};
pub use utils::logger::{init_logger, init_logger_with_level};
