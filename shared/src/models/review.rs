//! Customer Review Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Public review of a restaurant microsite
///
/// Unapproved reviews are held back from the public page when the
/// restaurant's `reviews_require_approval` setting is on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerReview {
    pub id: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    /// Rating 1-5, validated by the caller
    pub rating: i32,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
}

/// Create customer review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerReviewCreate {
    pub restaurant_id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub is_approved: bool,
}
