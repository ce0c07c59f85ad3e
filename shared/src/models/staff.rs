//! Staff Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Staff member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    /// Free-form role label (Chef, Server, Host, ...)
    pub role: String,
    pub email: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub created_at: Timestamp,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub role: String,
    pub email: String,
    pub restaurant_id: String,
}

/// Update staff payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}
