//! RestaurantStore - the in-memory entity store
//!
//! One coarse `RwLock` guards the whole state: operations like
//! [`RestaurantStore::deduct_ingredients_from_stock`] read one
//! collection and write another, and must do so in a single logical
//! step. Per-collection locks would allow interleaved partial updates.
//!
//! The store is cheaply cloneable (all state behind `Arc`); clones
//! share the same underlying collections.

mod catalog;
mod crm;
mod inventory;
mod loyalty;
mod orders;
mod purchasing;
mod reviews;
mod staff;
mod tables;
mod versions;
mod visitors;
mod website;

pub use versions::CollectionVersions;

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{
    Customer, CustomerFeedback, CustomerReview, DiningTable, Ingredient, LoyaltyPoints,
    LoyaltyTransaction, MenuCategory, MenuItem, MenuItemIngredient, Order, PurchaseOrder,
    PurchaseOrderItem, Restaurant, RestaurantCreate, RestaurantWebsite, Staff,
};
use shared::util::{entity_id, now_millis};

use crate::config::StoreConfig;
use crate::seed;

/// All domain collections plus the selected-restaurant pointer
///
/// Only the id of the selected restaurant is stored; the "current
/// restaurant" view is always derived by lookup so there is no second
/// copy of the record to keep in sync.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) restaurants: Vec<Restaurant>,
    pub(crate) selected_restaurant_id: Option<String>,
    pub(crate) menu_categories: Vec<MenuCategory>,
    pub(crate) menu_items: Vec<MenuItem>,
    pub(crate) dining_tables: Vec<DiningTable>,
    pub(crate) staff: Vec<Staff>,
    pub(crate) orders: Vec<Order>,
    pub(crate) ingredients: Vec<Ingredient>,
    pub(crate) menu_item_ingredients: Vec<MenuItemIngredient>,
    pub(crate) purchase_orders: Vec<PurchaseOrder>,
    pub(crate) purchase_order_items: Vec<PurchaseOrderItem>,
    pub(crate) customers: Vec<Customer>,
    pub(crate) customer_feedback: Vec<CustomerFeedback>,
    pub(crate) customer_reviews: Vec<CustomerReview>,
    pub(crate) loyalty_points: Vec<LoyaltyPoints>,
    pub(crate) loyalty_transactions: Vec<LoyaltyTransaction>,
}

/// Single source of truth for every domain collection
///
/// All mutations go through the operation set defined across the
/// `store` submodules. Update/delete against a missing id is a silent
/// no-op; the only checked failure is loyalty redemption.
#[derive(Clone)]
pub struct RestaurantStore {
    config: StoreConfig,
    state: Arc<RwLock<StoreState>>,
    versions: Arc<CollectionVersions>,
}

impl fmt::Debug for RestaurantStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("RestaurantStore")
            .field("restaurants", &state.restaurants.len())
            .field("menu_items", &state.menu_items.len())
            .field("orders", &state.orders.len())
            .field("ingredients", &state.ingredients.len())
            .field("customers", &state.customers.len())
            .finish()
    }
}

impl RestaurantStore {
    /// Create an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(StoreState::default())),
            versions: Arc::new(CollectionVersions::new()),
        }
    }

    /// Create a store preloaded with the demo dataset
    ///
    /// Seeding happens exactly once, at construction; there is no
    /// re-seed or reset operation.
    pub fn with_demo_data(config: StoreConfig) -> Self {
        let state = seed::demo_state(&config);
        tracing::info!(
            "📦 RestaurantStore: seeded {} restaurants, {} categories, {} menu items, {} orders",
            state.restaurants.len(),
            state.menu_categories.len(),
            state.menu_items.len(),
            state.orders.len(),
        );
        Self {
            config,
            state: Arc::new(RwLock::new(state)),
            versions: Arc::new(CollectionVersions::new()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Current version of a collection, for change detection
    pub fn version(&self, collection: &str) -> u64 {
        self.versions.get(collection)
    }

    // =========================================================================
    // Restaurants
    // =========================================================================

    /// Register a new restaurant, initialized with default website settings
    pub fn add_restaurant(&self, payload: RestaurantCreate) -> Restaurant {
        let restaurant = Restaurant {
            id: entity_id("rest"),
            name: payload.name,
            slug: payload.slug,
            owner_name: payload.owner_name,
            owner_email: payload.owner_email,
            created_at: now_millis(),
            website: RestaurantWebsite {
                points_per_order: self.config.points_per_order,
                ..RestaurantWebsite::default()
            },
        };
        tracing::debug!(id = %restaurant.id, slug = %restaurant.slug, "restaurant created");
        self.state.write().restaurants.push(restaurant.clone());
        self.versions.increment("restaurant");
        restaurant
    }

    /// Snapshot of all restaurants
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.state.read().restaurants.clone()
    }

    pub fn restaurant(&self, restaurant_id: &str) -> Option<Restaurant> {
        self.state
            .read()
            .restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned()
    }

    /// Tenant resolution for the routing layer
    pub fn restaurant_by_slug(&self, slug: &str) -> Option<Restaurant> {
        self.state
            .read()
            .restaurants
            .iter()
            .find(|r| r.slug == slug)
            .cloned()
    }

    /// Point the "current restaurant" at the given id (or clear it)
    ///
    /// The id is not validated; selecting an unknown id simply makes
    /// [`RestaurantStore::current_restaurant`] return `None`.
    pub fn select_restaurant(&self, restaurant_id: Option<&str>) {
        self.state.write().selected_restaurant_id = restaurant_id.map(String::from);
    }

    /// The selected restaurant, derived by lookup — never a second copy
    pub fn current_restaurant(&self) -> Option<Restaurant> {
        let state = self.state.read();
        let id = state.selected_restaurant_id.as_deref()?;
        state.restaurants.iter().find(|r| r.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestaurantStore {
        RestaurantStore::new(StoreConfig::default())
    }

    #[test]
    fn test_add_restaurant_assigns_id_and_defaults() {
        let store = store();
        let created = store.add_restaurant(RestaurantCreate {
            name: "Bistro Bella".to_string(),
            slug: "bistro-bella".to_string(),
            owner_name: "Isabella Chen".to_string(),
            owner_email: "isabella@bistrobella.com".to_string(),
        });
        assert!(created.id.starts_with("rest-"));
        assert_eq!(created.website.points_per_order, 10);
        assert!(created.website.reviews_require_approval);
        assert_eq!(store.restaurants().len(), 1);
        assert_eq!(store.version("restaurant"), 1);
    }

    #[test]
    fn test_restaurant_lookup_by_slug() {
        let store = RestaurantStore::with_demo_data(StoreConfig::default());
        let found = store.restaurant_by_slug("urban-plate").unwrap();
        assert_eq!(found.name, "Urban Plate");
        assert!(store.restaurant_by_slug("no-such-tenant").is_none());
    }

    #[test]
    fn test_current_restaurant_is_derived_by_lookup() {
        let store = RestaurantStore::with_demo_data(StoreConfig::default());
        assert_eq!(store.current_restaurant().unwrap().id, "rest1");

        store.select_restaurant(Some("rest2"));
        assert_eq!(store.current_restaurant().unwrap().name, "Urban Plate");

        store.select_restaurant(Some("rest-unknown"));
        assert!(store.current_restaurant().is_none());

        store.select_restaurant(None);
        assert!(store.current_restaurant().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let clone = store.clone();
        store.add_restaurant(RestaurantCreate {
            name: "Seaside Grill".to_string(),
            slug: "seaside-grill".to_string(),
            owner_name: "Sarah Martinez".to_string(),
            owner_email: "sarah@seasidegrill.com".to_string(),
        });
        assert_eq!(clone.restaurants().len(), 1);
    }
}
