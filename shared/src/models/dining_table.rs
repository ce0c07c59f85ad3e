//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub seats: i32,
    pub is_available: bool,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub created_at: Timestamp,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub seats: i32,
    pub is_available: bool,
    pub restaurant_id: String,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub seats: Option<i32>,
    pub is_available: Option<bool>,
}
