//! Loyalty points: balances plus an append-only transaction ledger
//!
//! One balance row per (customer, restaurant) pair, kept consistent
//! with the ledger: balance always equals earned minus redeemed points.
//! Redemption is the store's single checked failure.

use shared::models::{LoyaltyPoints, LoyaltyTransaction, LoyaltyTransactionKind};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    /// Credit points to a (customer, restaurant) balance
    ///
    /// Creates the balance row on first earn; always appends an
    /// `earned` ledger entry either way.
    pub fn add_loyalty_points(
        &self,
        customer_id: &str,
        restaurant_id: &str,
        points: i64,
        order_id: Option<&str>,
    ) {
        let mut state = self.state.write();
        if let Some(balance) = state
            .loyalty_points
            .iter_mut()
            .find(|b| b.customer_id == customer_id && b.restaurant_id == restaurant_id)
        {
            balance.points += points;
        } else {
            state.loyalty_points.push(LoyaltyPoints {
                id: entity_id("lp"),
                customer_id: customer_id.to_string(),
                restaurant_id: restaurant_id.to_string(),
                points,
                created_at: now_millis(),
            });
        }
        state.loyalty_transactions.push(LoyaltyTransaction {
            id: entity_id("lt"),
            customer_id: customer_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            points,
            kind: LoyaltyTransactionKind::Earned,
            order_id: order_id.map(String::from),
            created_at: now_millis(),
        });
        drop(state);
        tracing::debug!(customer_id, restaurant_id, points, "loyalty points earned");
        self.versions.increment("loyalty_points");
        self.versions.increment("loyalty_transaction");
    }

    /// Debit points from a balance; `false` means nothing happened
    ///
    /// Fails without mutation when no balance row exists or the balance
    /// is short. On success the debit and its `redeemed` ledger entry
    /// land together under one guard.
    #[must_use]
    pub fn redeem_loyalty_points(
        &self,
        customer_id: &str,
        restaurant_id: &str,
        points: i64,
    ) -> bool {
        let mut state = self.state.write();
        let Some(balance) = state
            .loyalty_points
            .iter_mut()
            .find(|b| b.customer_id == customer_id && b.restaurant_id == restaurant_id)
        else {
            return false;
        };
        if balance.points < points {
            return false;
        }
        balance.points -= points;
        state.loyalty_transactions.push(LoyaltyTransaction {
            id: entity_id("lt"),
            customer_id: customer_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            points,
            kind: LoyaltyTransactionKind::Redeemed,
            order_id: None,
            created_at: now_millis(),
        });
        drop(state);
        tracing::debug!(customer_id, restaurant_id, points, "loyalty points redeemed");
        self.versions.increment("loyalty_points");
        self.versions.increment("loyalty_transaction");
        true
    }

    /// Current balance for a (customer, restaurant) pair, zero if none
    pub fn customer_loyalty_points(&self, customer_id: &str, restaurant_id: &str) -> i64 {
        self.state
            .read()
            .loyalty_points
            .iter()
            .find(|b| b.customer_id == customer_id && b.restaurant_id == restaurant_id)
            .map(|b| b.points)
            .unwrap_or(0)
    }

    /// Ledger entries for a (customer, restaurant) pair, oldest first
    pub fn loyalty_transactions(
        &self,
        customer_id: &str,
        restaurant_id: &str,
    ) -> Vec<LoyaltyTransaction> {
        self.state
            .read()
            .loyalty_transactions
            .iter()
            .filter(|t| t.customer_id == customer_id && t.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn ledger_balance(store: &RestaurantStore, customer_id: &str, restaurant_id: &str) -> i64 {
        store
            .loyalty_transactions(customer_id, restaurant_id)
            .iter()
            .map(|t| match t.kind {
                LoyaltyTransactionKind::Earned => t.points,
                LoyaltyTransactionKind::Redeemed => -t.points,
            })
            .sum()
    }

    #[test]
    fn test_first_earn_creates_balance_row() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 10, Some("order1"));

        assert_eq!(store.customer_loyalty_points("cust1", "rest1"), 10);
        let txs = store.loyalty_transactions("cust1", "rest1");
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].kind, LoyaltyTransactionKind::Earned);
        assert_eq!(txs[0].order_id.as_deref(), Some("order1"));
    }

    #[test]
    fn test_subsequent_earns_increment_the_same_row() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 10, None);
        store.add_loyalty_points("cust1", "rest1", 25, None);

        assert_eq!(store.customer_loyalty_points("cust1", "rest1"), 35);
        assert_eq!(store.loyalty_transactions("cust1", "rest1").len(), 2);
    }

    #[test]
    fn test_balances_are_scoped_per_restaurant() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 10, None);
        store.add_loyalty_points("cust1", "rest2", 40, None);

        assert_eq!(store.customer_loyalty_points("cust1", "rest1"), 10);
        assert_eq!(store.customer_loyalty_points("cust1", "rest2"), 40);
        assert_eq!(store.customer_loyalty_points("cust2", "rest1"), 0);
    }

    #[test]
    fn test_redeem_fails_without_balance_row() {
        let store = RestaurantStore::new(StoreConfig::default());
        assert!(!store.redeem_loyalty_points("cust1", "rest1", 5));
        assert!(store.loyalty_transactions("cust1", "rest1").is_empty());
    }

    #[test]
    fn test_redeem_fails_on_short_balance_without_mutation() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 10, None);

        assert!(!store.redeem_loyalty_points("cust1", "rest1", 11));
        assert_eq!(store.customer_loyalty_points("cust1", "rest1"), 10);
        assert_eq!(store.loyalty_transactions("cust1", "rest1").len(), 1);
    }

    #[test]
    fn test_redeem_debits_and_appends_ledger_entry() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 50, None);

        assert!(store.redeem_loyalty_points("cust1", "rest1", 20));
        assert_eq!(store.customer_loyalty_points("cust1", "rest1"), 30);
        let txs = store.loyalty_transactions("cust1", "rest1");
        assert_eq!(txs.last().map(|t| t.kind), Some(LoyaltyTransactionKind::Redeemed));
    }

    #[test]
    fn test_redeeming_the_exact_balance_succeeds() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 30, None);
        assert!(store.redeem_loyalty_points("cust1", "rest1", 30));
        assert_eq!(store.customer_loyalty_points("cust1", "rest1"), 0);
    }

    #[test]
    fn test_balance_always_equals_ledger_sum() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.add_loyalty_points("cust1", "rest1", 10, Some("order1"));
        store.add_loyalty_points("cust1", "rest1", 25, Some("order2"));
        assert!(store.redeem_loyalty_points("cust1", "rest1", 15));
        assert!(!store.redeem_loyalty_points("cust1", "rest1", 100));
        store.add_loyalty_points("cust1", "rest1", 5, None);

        assert_eq!(
            store.customer_loyalty_points("cust1", "rest1"),
            ledger_balance(&store, "cust1", "rest1")
        );
    }
}
