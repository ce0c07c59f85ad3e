//! Restaurant Model

use serde::{Deserialize, Serialize};

use super::website::RestaurantWebsite;
use crate::types::Timestamp;

/// Restaurant entity (tenant)
///
/// The slug is the URL-safe tenant identifier used for the public
/// microsite (`https://<slug>.<domain>`). Uniqueness is the caller's
/// responsibility; the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub owner_name: String,
    pub owner_email: String,
    pub created_at: Timestamp,
    /// Public microsite settings, always initialized with defaults
    pub website: RestaurantWebsite,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub slug: String,
    pub owner_name: String,
    pub owner_email: String,
}
