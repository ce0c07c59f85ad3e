//! Customer (CRM) operations: profiles and per-order feedback

use shared::models::{
    Customer, CustomerCreate, CustomerFeedback, CustomerFeedbackCreate, CustomerUpdate,
};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    pub fn add_customer(&self, payload: CustomerCreate) -> Customer {
        let customer = Customer {
            id: entity_id("cust"),
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            tags: payload.tags,
            restaurant_id: payload.restaurant_id,
            marketing_opt_in: payload.marketing_opt_in,
            created_at: now_millis(),
            last_visit_date: None,
        };
        self.state.write().customers.push(customer.clone());
        self.versions.increment("customer");
        customer
    }

    pub fn update_customer(&self, customer_id: &str, patch: CustomerUpdate) {
        let mut state = self.state.write();
        let Some(customer) = state.customers.iter_mut().find(|c| c.id == customer_id) else {
            return;
        };
        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(phone) = patch.phone {
            customer.phone = phone;
        }
        if let Some(email) = patch.email {
            customer.email = Some(email);
        }
        if let Some(tags) = patch.tags {
            customer.tags = tags;
        }
        if let Some(marketing_opt_in) = patch.marketing_opt_in {
            customer.marketing_opt_in = marketing_opt_in;
        }
        if let Some(last_visit_date) = patch.last_visit_date {
            customer.last_visit_date = Some(last_visit_date);
        }
        drop(state);
        self.versions.increment("customer");
    }

    /// Delete a customer profile
    ///
    /// Feedback, reviews and loyalty rows referencing the customer are
    /// kept; they carry their own display data where it matters.
    pub fn delete_customer(&self, customer_id: &str) {
        let mut state = self.state.write();
        let before = state.customers.len();
        state.customers.retain(|c| c.id != customer_id);
        if state.customers.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("customer");
    }

    /// Snapshot of all customers
    pub fn customers(&self) -> Vec<Customer> {
        self.state.read().customers.clone()
    }

    pub fn customer(&self, customer_id: &str) -> Option<Customer> {
        self.state
            .read()
            .customers
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    pub fn add_customer_feedback(&self, payload: CustomerFeedbackCreate) -> CustomerFeedback {
        let feedback = CustomerFeedback {
            id: entity_id("fb"),
            customer_id: payload.customer_id,
            order_id: payload.order_id,
            rating: payload.rating,
            comment: payload.comment,
            created_at: now_millis(),
        };
        self.state.write().customer_feedback.push(feedback.clone());
        self.versions.increment("customer_feedback");
        feedback
    }

    /// All feedback entries left by one customer
    pub fn customer_feedback(&self, customer_id: &str) -> Vec<CustomerFeedback> {
        self.state
            .read()
            .customer_feedback
            .iter()
            .filter(|f| f.customer_id == customer_id)
            .cloned()
            .collect()
    }
}
