//! Loyalty Points Models

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Loyalty transaction kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTransactionKind {
    Earned,
    Redeemed,
}

/// Loyalty balance row — one per (customer, restaurant) pair
///
/// The balance is kept in sync with the transaction ledger: it always
/// equals earned minus redeemed points for the pair, and never goes
/// negative (redemption is checked before debit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyPoints {
    pub id: String,
    /// Customer reference (String ID)
    pub customer_id: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub points: i64,
    pub created_at: Timestamp,
}

/// Loyalty ledger entry — append-only, never mutated or deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyTransaction {
    pub id: String,
    /// Customer reference (String ID)
    pub customer_id: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    /// Points delta (always positive; the kind carries the sign)
    pub points: i64,
    #[serde(rename = "type")]
    pub kind: LoyaltyTransactionKind,
    /// Order that earned the points, when applicable
    pub order_id: Option<String>,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_kind_wire_format() {
        assert_eq!(
            serde_json::to_string(&LoyaltyTransactionKind::Earned).unwrap(),
            "\"earned\""
        );
        assert_eq!(
            serde_json::to_string(&LoyaltyTransactionKind::Redeemed).unwrap(),
            "\"redeemed\""
        );
    }

    #[test]
    fn test_transaction_kind_field_serializes_as_type() {
        let tx = LoyaltyTransaction {
            id: "lt-1".to_string(),
            customer_id: "cust-1".to_string(),
            restaurant_id: "rest1".to_string(),
            points: 10,
            kind: LoyaltyTransactionKind::Earned,
            order_id: None,
            created_at: 0,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "earned");
    }
}
