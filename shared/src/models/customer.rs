//! Customer (CRM) Models

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Customer entity (会员)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Free-form segmentation tags ("regular", "vegan", ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub marketing_opt_in: bool,
    pub created_at: Timestamp,
    pub last_visit_date: Option<Timestamp>,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub restaurant_id: String,
    pub marketing_opt_in: bool,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tags: Option<Vec<String>>,
    pub marketing_opt_in: Option<bool>,
    pub last_visit_date: Option<Timestamp>,
}

/// Per-order customer feedback entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerFeedback {
    pub id: String,
    /// Customer reference (String ID)
    pub customer_id: String,
    /// Order reference (String ID)
    pub order_id: String,
    /// Rating 1-5, validated by the caller
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// Create customer feedback payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerFeedbackCreate {
    pub customer_id: String,
    pub order_id: String,
    pub rating: i32,
    pub comment: Option<String>,
}
