//! Customer review operations
//!
//! Reviews belong to a restaurant's public microsite. The approval gate
//! is applied at query time: when the site has
//! `reviews_require_approval` on, only approved reviews are surfaced.

use shared::models::{CustomerReview, CustomerReviewCreate};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    pub fn add_customer_review(&self, payload: CustomerReviewCreate) -> CustomerReview {
        let review = CustomerReview {
            id: entity_id("rev"),
            restaurant_id: payload.restaurant_id,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            rating: payload.rating,
            comment: payload.comment,
            is_approved: payload.is_approved,
            created_at: now_millis(),
        };
        self.state.write().customer_reviews.push(review.clone());
        self.versions.increment("customer_review");
        review
    }

    /// Flip the moderation flag on a review
    pub fn set_review_approval(&self, review_id: &str, is_approved: bool) {
        let mut state = self.state.write();
        let Some(review) = state
            .customer_reviews
            .iter_mut()
            .find(|r| r.id == review_id)
        else {
            return;
        };
        review.is_approved = is_approved;
        drop(state);
        self.versions.increment("customer_review");
    }

    pub fn delete_customer_review(&self, review_id: &str) {
        let mut state = self.state.write();
        let before = state.customer_reviews.len();
        state.customer_reviews.retain(|r| r.id != review_id);
        if state.customer_reviews.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("customer_review");
    }

    /// Every review for a restaurant, approved or not (admin view)
    pub fn restaurant_reviews(&self, restaurant_id: &str) -> Vec<CustomerReview> {
        self.state
            .read()
            .customer_reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    /// Reviews visible on the public page
    ///
    /// Honors the restaurant's `reviews_require_approval` setting; an
    /// unknown restaurant id yields an empty list.
    pub fn public_reviews(&self, restaurant_id: &str) -> Vec<CustomerReview> {
        let state = self.state.read();
        let Some(restaurant) = state.restaurants.iter().find(|r| r.id == restaurant_id) else {
            return Vec::new();
        };
        let require_approval = restaurant.website.reviews_require_approval;
        state
            .customer_reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .filter(|r| !require_approval || r.is_approved)
            .cloned()
            .collect()
    }
}
