//! Order lifecycle operations
//!
//! Orders embed denormalized line items (name and price captured at
//! order time) so history stays accurate when the menu changes.

use shared::models::{Order, OrderCreate, OrderItem, OrderStatus};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    /// Create an order with its line items
    ///
    /// The order id and line-item ids are assigned here; the total is
    /// taken as given (caller-computed).
    pub fn add_order(&self, payload: OrderCreate) -> Order {
        let order_id = entity_id("order");
        let items = payload
            .items
            .into_iter()
            .map(|line| OrderItem {
                id: entity_id("oi"),
                menu_item_id: line.menu_item_id,
                menu_item_name: line.menu_item_name,
                quantity: line.quantity,
                price: line.price,
                order_id: order_id.clone(),
            })
            .collect();
        let order = Order {
            id: order_id,
            table_id: payload.table_id,
            customer_name: payload.customer_name,
            status: payload.status,
            total: payload.total,
            items,
            restaurant_id: payload.restaurant_id,
            created_at: now_millis(),
        };
        tracing::debug!(id = %order.id, total = order.total, "order created");
        self.state.write().orders.push(order.clone());
        self.versions.increment("order");
        order
    }

    /// Patch the order status (pending → preparing → completed)
    ///
    /// The store does not enforce transition order; stock deduction on
    /// completion is a separate, explicit call.
    pub fn update_order_status(&self, order_id: &str, status: OrderStatus) {
        let mut state = self.state.write();
        let Some(order) = state.orders.iter_mut().find(|o| o.id == order_id) else {
            return;
        };
        order.status = status;
        drop(state);
        self.versions.increment("order");
    }

    /// Snapshot of all orders
    pub fn orders(&self) -> Vec<Order> {
        self.state.read().orders.clone()
    }

    pub fn order(&self, order_id: &str) -> Option<Order> {
        self.state
            .read()
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }
}
