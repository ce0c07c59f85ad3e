//! Menu Item Model

use serde::{Deserialize, Serialize};

use crate::types::{Cents, Timestamp};

/// Menu item entity
///
/// `category_id` and `restaurant_id` are independent references; the
/// store does not cross-check that the category belongs to the same
/// restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in cents
    pub price: Cents,
    pub image_url: Option<String>,
    pub is_available: bool,
    /// Category reference (String ID)
    pub category_id: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub is_promoted: bool,
    /// Badge shown on the public site while promoted (e.g. "Special")
    pub promotion_tag: Option<String>,
    #[serde(default)]
    pub is_bestseller: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    /// Price in cents
    pub price: Cents,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub category_id: String,
    pub restaurant_id: String,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Cents>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub category_id: Option<String>,
}
