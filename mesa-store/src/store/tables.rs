//! Dining table operations

use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    pub fn add_dining_table(&self, payload: DiningTableCreate) -> DiningTable {
        let table = DiningTable {
            id: entity_id("table"),
            name: payload.name,
            seats: payload.seats,
            is_available: payload.is_available,
            restaurant_id: payload.restaurant_id,
            created_at: now_millis(),
        };
        self.state.write().dining_tables.push(table.clone());
        self.versions.increment("dining_table");
        table
    }

    pub fn update_dining_table(&self, table_id: &str, patch: DiningTableUpdate) {
        let mut state = self.state.write();
        let Some(table) = state.dining_tables.iter_mut().find(|t| t.id == table_id) else {
            return;
        };
        if let Some(name) = patch.name {
            table.name = name;
        }
        if let Some(seats) = patch.seats {
            table.seats = seats;
        }
        if let Some(is_available) = patch.is_available {
            table.is_available = is_available;
        }
        drop(state);
        self.versions.increment("dining_table");
    }

    /// Delete a table
    ///
    /// Orders referencing the table keep their `table_id` — the
    /// reference is weak by design.
    pub fn delete_dining_table(&self, table_id: &str) {
        let mut state = self.state.write();
        let before = state.dining_tables.len();
        state.dining_tables.retain(|t| t.id != table_id);
        if state.dining_tables.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("dining_table");
    }

    /// Snapshot of all dining tables
    pub fn dining_tables(&self) -> Vec<DiningTable> {
        self.state.read().dining_tables.clone()
    }
}
