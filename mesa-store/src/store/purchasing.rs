//! Purchase order operations: supplier replenishment and receiving
//!
//! Receiving a purchase order is the only path that credits ingredient
//! stock; the debit side lives in the inventory module.

use shared::models::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderItem, PurchaseOrderItemCreate,
    PurchaseOrderItemUpdate, PurchaseOrderStatus, PurchaseOrderUpdate,
};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    // =========================================================================
    // Purchase orders
    // =========================================================================

    pub fn add_purchase_order(&self, payload: PurchaseOrderCreate) -> PurchaseOrder {
        let order = PurchaseOrder {
            id: entity_id("po"),
            supplier_name: payload.supplier_name,
            order_date: payload.order_date,
            delivery_date: None,
            status: payload.status.unwrap_or(PurchaseOrderStatus::Pending),
            restaurant_id: payload.restaurant_id,
            total: payload.total,
            notes: payload.notes,
            created_at: now_millis(),
        };
        self.state.write().purchase_orders.push(order.clone());
        self.versions.increment("purchase_order");
        order
    }

    pub fn update_purchase_order(&self, order_id: &str, patch: PurchaseOrderUpdate) {
        let mut state = self.state.write();
        let Some(order) = state.purchase_orders.iter_mut().find(|o| o.id == order_id) else {
            return;
        };
        if let Some(supplier_name) = patch.supplier_name {
            order.supplier_name = supplier_name;
        }
        if let Some(order_date) = patch.order_date {
            order.order_date = order_date;
        }
        if let Some(delivery_date) = patch.delivery_date {
            order.delivery_date = Some(delivery_date);
        }
        if let Some(status) = patch.status {
            order.status = status;
        }
        if let Some(total) = patch.total {
            order.total = total;
        }
        if let Some(notes) = patch.notes {
            order.notes = Some(notes);
        }
        drop(state);
        self.versions.increment("purchase_order");
    }

    /// Delete a purchase order and all of its line items
    pub fn delete_purchase_order(&self, order_id: &str) {
        let mut state = self.state.write();
        let before = state.purchase_orders.len();
        state.purchase_orders.retain(|o| o.id != order_id);
        if state.purchase_orders.len() == before {
            return;
        }
        let items_before = state.purchase_order_items.len();
        state
            .purchase_order_items
            .retain(|i| i.purchase_order_id != order_id);
        let removed_items = items_before - state.purchase_order_items.len();
        drop(state);
        self.versions.increment("purchase_order");
        if removed_items > 0 {
            self.versions.increment("purchase_order_item");
        }
    }

    /// Snapshot of all purchase orders
    pub fn purchase_orders(&self) -> Vec<PurchaseOrder> {
        self.state.read().purchase_orders.clone()
    }

    pub fn purchase_order(&self, order_id: &str) -> Option<PurchaseOrder> {
        self.state
            .read()
            .purchase_orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }

    /// Mark a purchase order delivered and credit its items into stock
    ///
    /// Stamps `delivery_date` to now, then for every line item adds the
    /// item quantity onto the matching ingredient's stock. Items whose
    /// ingredient no longer exists are skipped silently.
    pub fn receive_purchase_order(&self, order_id: &str) {
        let mut state = self.state.write();
        let Some(order) = state.purchase_orders.iter_mut().find(|o| o.id == order_id) else {
            return;
        };
        order.status = PurchaseOrderStatus::Delivered;
        order.delivery_date = Some(now_millis());

        let credits: Vec<(String, rust_decimal::Decimal)> = state
            .purchase_order_items
            .iter()
            .filter(|i| i.purchase_order_id == order_id)
            .map(|i| (i.ingredient_id.clone(), i.quantity))
            .collect();
        let mut credited = 0usize;
        for (ingredient_id, quantity) in credits {
            if let Some(ingredient) = state
                .ingredients
                .iter_mut()
                .find(|i| i.id == ingredient_id)
            {
                ingredient.stock_quantity += quantity;
                credited += 1;
            }
        }
        drop(state);
        tracing::debug!(order_id, credited, "purchase order received");
        self.versions.increment("purchase_order");
        if credited > 0 {
            self.versions.increment("ingredient");
        }
    }

    // =========================================================================
    // Purchase order items
    // =========================================================================

    pub fn add_purchase_order_item(&self, payload: PurchaseOrderItemCreate) -> PurchaseOrderItem {
        let item = PurchaseOrderItem {
            id: entity_id("poi"),
            purchase_order_id: payload.purchase_order_id,
            ingredient_id: payload.ingredient_id,
            ingredient_name: payload.ingredient_name,
            quantity: payload.quantity,
            cost: payload.cost,
        };
        self.state.write().purchase_order_items.push(item.clone());
        self.versions.increment("purchase_order_item");
        item
    }

    pub fn update_purchase_order_item(&self, item_id: &str, patch: PurchaseOrderItemUpdate) {
        let mut state = self.state.write();
        let Some(item) = state
            .purchase_order_items
            .iter_mut()
            .find(|i| i.id == item_id)
        else {
            return;
        };
        if let Some(ingredient_id) = patch.ingredient_id {
            item.ingredient_id = ingredient_id;
        }
        if let Some(ingredient_name) = patch.ingredient_name {
            item.ingredient_name = ingredient_name;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(cost) = patch.cost {
            item.cost = cost;
        }
        drop(state);
        self.versions.increment("purchase_order_item");
    }

    pub fn delete_purchase_order_item(&self, item_id: &str) {
        let mut state = self.state.write();
        let before = state.purchase_order_items.len();
        state.purchase_order_items.retain(|i| i.id != item_id);
        if state.purchase_order_items.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("purchase_order_item");
    }

    /// Snapshot of all purchase order line items
    pub fn purchase_order_items(&self) -> Vec<PurchaseOrderItem> {
        self.state.read().purchase_order_items.clone()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use shared::models::{IngredientCreate, UnitType};

    use super::*;
    use crate::config::StoreConfig;

    fn purchase_order(store: &RestaurantStore, supplier: &str) -> PurchaseOrder {
        store.add_purchase_order(PurchaseOrderCreate {
            supplier_name: supplier.to_string(),
            order_date: now_millis(),
            status: None,
            restaurant_id: "rest1".to_string(),
            total: 12500,
            notes: None,
        })
    }

    #[test]
    fn test_create_defaults_to_pending() {
        let store = RestaurantStore::new(StoreConfig::default());
        let po = purchase_order(&store, "Fresh Farms Co.");
        assert_eq!(po.status, PurchaseOrderStatus::Pending);
        assert_eq!(po.delivery_date, None);
    }

    #[test]
    fn test_delete_cascades_to_line_items() {
        let store = RestaurantStore::new(StoreConfig::default());
        let po = purchase_order(&store, "Fresh Farms Co.");
        let other = purchase_order(&store, "Ocean Catch Ltd.");
        store.add_purchase_order_item(PurchaseOrderItemCreate {
            purchase_order_id: po.id.clone(),
            ingredient_id: "ingr-flour".to_string(),
            ingredient_name: "Flour".to_string(),
            quantity: Decimal::from(25),
            cost: 4500,
        });
        store.add_purchase_order_item(PurchaseOrderItemCreate {
            purchase_order_id: other.id.clone(),
            ingredient_id: "ingr-salmon".to_string(),
            ingredient_name: "Salmon".to_string(),
            quantity: Decimal::from(8),
            cost: 8000,
        });

        store.delete_purchase_order(&po.id);

        let items = store.purchase_order_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].purchase_order_id, other.id);
        assert_eq!(store.purchase_orders().len(), 1);
    }

    #[test]
    fn test_receive_credits_stock_and_stamps_delivery() {
        let store = RestaurantStore::new(StoreConfig::default());
        let flour = store.add_ingredient(IngredientCreate {
            name: "Flour".to_string(),
            unit_type: UnitType::Kg,
            stock_quantity: Decimal::from(3),
            low_stock_threshold: Decimal::from(5),
            restaurant_id: "rest1".to_string(),
            cost: 180,
        });
        let po = purchase_order(&store, "Fresh Farms Co.");
        store.add_purchase_order_item(PurchaseOrderItemCreate {
            purchase_order_id: po.id.clone(),
            ingredient_id: flour.id.clone(),
            ingredient_name: "Flour".to_string(),
            quantity: Decimal::from(25),
            cost: 4500,
        });
        // item for an ingredient that no longer exists is skipped
        store.add_purchase_order_item(PurchaseOrderItemCreate {
            purchase_order_id: po.id.clone(),
            ingredient_id: "ingr-gone".to_string(),
            ingredient_name: "Saffron".to_string(),
            quantity: Decimal::from(1),
            cost: 9000,
        });

        store.receive_purchase_order(&po.id);

        let received = store.purchase_order(&po.id).unwrap();
        assert_eq!(received.status, PurchaseOrderStatus::Delivered);
        assert!(received.delivery_date.is_some());
        assert_eq!(
            store.ingredient(&flour.id).unwrap().stock_quantity,
            Decimal::from(28)
        );
    }

    #[test]
    fn test_receive_missing_order_is_a_silent_noop() {
        let store = RestaurantStore::new(StoreConfig::default());
        store.receive_purchase_order("po-unknown");
        assert_eq!(store.version("purchase_order"), 0);
    }

    #[test]
    fn test_update_patch_is_shallow() {
        let store = RestaurantStore::new(StoreConfig::default());
        let po = purchase_order(&store, "Fresh Farms Co.");

        store.update_purchase_order(
            &po.id,
            PurchaseOrderUpdate {
                total: Some(14000),
                notes: Some("two pallets short".to_string()),
                ..PurchaseOrderUpdate::default()
            },
        );

        let updated = store.purchase_order(&po.id).unwrap();
        assert_eq!(updated.total, 14000);
        assert_eq!(updated.notes.as_deref(), Some("two pallets short"));
        assert_eq!(updated.supplier_name, "Fresh Farms Co.");
    }
}
