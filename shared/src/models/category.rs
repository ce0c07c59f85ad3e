//! Menu Category Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Menu category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// Create menu category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryCreate {
    pub name: String,
    pub restaurant_id: String,
    pub sort_order: i32,
}

/// Update menu category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCategoryUpdate {
    pub name: Option<String>,
    pub sort_order: Option<i32>,
}
