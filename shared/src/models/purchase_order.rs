//! Purchase Order Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Cents, Timestamp};

/// Purchase order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

/// Purchase order entity (supplier replenishment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub supplier_name: String,
    pub order_date: Timestamp,
    /// Stamped when the order is received
    pub delivery_date: Option<Timestamp>,
    pub status: PurchaseOrderStatus,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    /// Total in cents
    pub total: Cents,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// Create purchase order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderCreate {
    pub supplier_name: String,
    pub order_date: Timestamp,
    pub status: Option<PurchaseOrderStatus>,
    pub restaurant_id: String,
    pub total: Cents,
    pub notes: Option<String>,
}

/// Update purchase order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseOrderUpdate {
    pub supplier_name: Option<String>,
    pub order_date: Option<Timestamp>,
    pub delivery_date: Option<Timestamp>,
    pub status: Option<PurchaseOrderStatus>,
    pub total: Option<Cents>,
    pub notes: Option<String>,
}

/// Purchase order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    pub id: String,
    /// Owning purchase order reference (String ID)
    pub purchase_order_id: String,
    /// Ingredient reference (String ID)
    pub ingredient_id: String,
    /// Name snapshot at order time
    pub ingredient_name: String,
    pub quantity: Decimal,
    /// Line cost in cents
    pub cost: Cents,
}

/// Create purchase order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderItemCreate {
    pub purchase_order_id: String,
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub quantity: Decimal,
    pub cost: Cents,
}

/// Update purchase order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseOrderItemUpdate {
    pub ingredient_id: Option<String>,
    pub ingredient_name: Option<String>,
    pub quantity: Option<Decimal>,
    pub cost: Option<Cents>,
}
