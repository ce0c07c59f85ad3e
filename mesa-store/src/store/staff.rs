//! Staff roster operations

use shared::models::{Staff, StaffCreate, StaffUpdate};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    pub fn add_staff(&self, payload: StaffCreate) -> Staff {
        let member = Staff {
            id: entity_id("staff"),
            name: payload.name,
            role: payload.role,
            email: payload.email,
            restaurant_id: payload.restaurant_id,
            created_at: now_millis(),
        };
        self.state.write().staff.push(member.clone());
        self.versions.increment("staff");
        member
    }

    pub fn update_staff(&self, staff_id: &str, patch: StaffUpdate) {
        let mut state = self.state.write();
        let Some(member) = state.staff.iter_mut().find(|s| s.id == staff_id) else {
            return;
        };
        if let Some(name) = patch.name {
            member.name = name;
        }
        if let Some(role) = patch.role {
            member.role = role;
        }
        if let Some(email) = patch.email {
            member.email = email;
        }
        drop(state);
        self.versions.increment("staff");
    }

    pub fn delete_staff(&self, staff_id: &str) {
        let mut state = self.state.write();
        let before = state.staff.len();
        state.staff.retain(|s| s.id != staff_id);
        if state.staff.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("staff");
    }

    /// Snapshot of the whole roster
    pub fn staff_members(&self) -> Vec<Staff> {
        self.state.read().staff.clone()
    }
}
