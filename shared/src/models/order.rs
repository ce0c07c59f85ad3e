//! Order Model

use serde::{Deserialize, Serialize};

use crate::types::{Cents, Timestamp};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Completed,
}

/// Order entity
///
/// `total` is computed by the caller at order time; the store does not
/// re-derive it from the line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Dining table reference (weak — the table may be deleted later)
    pub table_id: Option<String>,
    /// Walk-in / pickup customer name when no table is assigned
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    /// Total in cents, caller-computed
    pub total: Cents,
    pub items: Vec<OrderItem>,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub created_at: Timestamp,
}

/// Order line item
///
/// Name and price are denormalized snapshots taken at order time so the
/// order stays historically accurate if the menu item is renamed,
/// repriced or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    /// Menu item reference (String ID)
    pub menu_item_id: String,
    /// Name snapshot at order time
    pub menu_item_name: String,
    pub quantity: i32,
    /// Price snapshot at order time, in cents
    pub price: Cents,
    /// Owning order reference (String ID)
    pub order_id: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    /// Total in cents, caller-computed
    pub total: Cents,
    pub items: Vec<OrderItemCreate>,
    pub restaurant_id: String,
}

/// Order line item payload (ids are assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub menu_item_id: String,
    pub menu_item_name: String,
    pub quantity: i32,
    pub price: Cents,
}
