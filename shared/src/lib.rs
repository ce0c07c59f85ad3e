//! Shared types for the Mesa platform
//!
//! Domain models and utility types used by the store engine and any
//! future surface crates (API, sync, exports).

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
pub use util::{entity_id, now_millis, snowflake_id};
