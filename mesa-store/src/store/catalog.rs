//! Menu catalog operations: categories, items, promotion flags

use shared::models::{
    MenuCategory, MenuCategoryCreate, MenuCategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    // =========================================================================
    // Menu categories
    // =========================================================================

    pub fn add_menu_category(&self, payload: MenuCategoryCreate) -> MenuCategory {
        let category = MenuCategory {
            id: entity_id("cat"),
            name: payload.name,
            restaurant_id: payload.restaurant_id,
            sort_order: payload.sort_order,
            created_at: now_millis(),
        };
        self.state.write().menu_categories.push(category.clone());
        self.versions.increment("menu_category");
        category
    }

    pub fn update_menu_category(&self, category_id: &str, patch: MenuCategoryUpdate) {
        let mut state = self.state.write();
        let Some(category) = state
            .menu_categories
            .iter_mut()
            .find(|c| c.id == category_id)
        else {
            return; // silent no-op per store contract
        };
        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(sort_order) = patch.sort_order {
            category.sort_order = sort_order;
        }
        drop(state);
        self.versions.increment("menu_category");
    }

    /// Delete a category and every menu item that belongs to it
    pub fn delete_menu_category(&self, category_id: &str) {
        let mut state = self.state.write();
        let before = state.menu_categories.len();
        state.menu_categories.retain(|c| c.id != category_id);
        if state.menu_categories.len() == before {
            return;
        }
        let items_before = state.menu_items.len();
        state.menu_items.retain(|i| i.category_id != category_id);
        let removed_items = items_before - state.menu_items.len();
        drop(state);
        tracing::debug!(category_id, removed_items, "category deleted");
        self.versions.increment("menu_category");
        if removed_items > 0 {
            self.versions.increment("menu_item");
        }
    }

    /// Snapshot of all menu categories
    pub fn menu_categories(&self) -> Vec<MenuCategory> {
        self.state.read().menu_categories.clone()
    }

    // =========================================================================
    // Menu items
    // =========================================================================

    pub fn add_menu_item(&self, payload: MenuItemCreate) -> MenuItem {
        let item = MenuItem {
            id: entity_id("item"),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
            is_available: payload.is_available,
            category_id: payload.category_id,
            restaurant_id: payload.restaurant_id,
            created_at: now_millis(),
            is_promoted: false,
            promotion_tag: None,
            is_bestseller: false,
        };
        self.state.write().menu_items.push(item.clone());
        self.versions.increment("menu_item");
        item
    }

    pub fn update_menu_item(&self, item_id: &str, patch: MenuItemUpdate) {
        let mut state = self.state.write();
        let Some(item) = state.menu_items.iter_mut().find(|i| i.id == item_id) else {
            return;
        };
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(image_url) = patch.image_url {
            item.image_url = Some(image_url);
        }
        if let Some(is_available) = patch.is_available {
            item.is_available = is_available;
        }
        if let Some(category_id) = patch.category_id {
            item.category_id = category_id;
        }
        drop(state);
        self.versions.increment("menu_item");
    }

    /// Delete a menu item
    ///
    /// Recipe links referencing the item are left in place (they are
    /// cleaned up when the ingredient is deleted); existing orders keep
    /// their denormalized name/price snapshots.
    pub fn delete_menu_item(&self, item_id: &str) {
        let mut state = self.state.write();
        let before = state.menu_items.len();
        state.menu_items.retain(|i| i.id != item_id);
        if state.menu_items.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("menu_item");
    }

    /// Snapshot of all menu items
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.state.read().menu_items.clone()
    }

    pub fn menu_item(&self, item_id: &str) -> Option<MenuItem> {
        self.state
            .read()
            .menu_items
            .iter()
            .find(|i| i.id == item_id)
            .cloned()
    }

    // =========================================================================
    // Promotions
    // =========================================================================

    /// Toggle the promotion flag on a menu item
    ///
    /// Enabling without an explicit tag applies the configured default
    /// badge; disabling always clears the tag.
    pub fn toggle_item_promotion(&self, item_id: &str, is_promoted: bool, tag: Option<&str>) {
        let mut state = self.state.write();
        let Some(item) = state.menu_items.iter_mut().find(|i| i.id == item_id) else {
            return;
        };
        item.is_promoted = is_promoted;
        item.promotion_tag = if is_promoted {
            Some(
                tag.map(String::from)
                    .unwrap_or_else(|| self.config.default_promotion_tag.clone()),
            )
        } else {
            None
        };
        drop(state);
        self.versions.increment("menu_item");
    }

    pub fn toggle_item_bestseller(&self, item_id: &str, is_bestseller: bool) {
        let mut state = self.state.write();
        let Some(item) = state.menu_items.iter_mut().find(|i| i.id == item_id) else {
            return;
        };
        item.is_bestseller = is_bestseller;
        drop(state);
        self.versions.increment("menu_item");
    }
}

#[cfg(test)]
mod tests {
    use shared::models::RestaurantCreate;

    use super::*;
    use crate::config::StoreConfig;

    fn store_with_restaurant() -> (RestaurantStore, String) {
        let store = RestaurantStore::new(StoreConfig::default());
        let rest = store.add_restaurant(RestaurantCreate {
            name: "Bistro Bella".to_string(),
            slug: "bistro-bella".to_string(),
            owner_name: "Isabella Chen".to_string(),
            owner_email: "isabella@bistrobella.com".to_string(),
        });
        (store, rest.id)
    }

    fn category(store: &RestaurantStore, restaurant_id: &str, name: &str) -> MenuCategory {
        store.add_menu_category(MenuCategoryCreate {
            name: name.to_string(),
            restaurant_id: restaurant_id.to_string(),
            sort_order: 1,
        })
    }

    fn item(store: &RestaurantStore, restaurant_id: &str, category_id: &str, name: &str) -> MenuItem {
        store.add_menu_item(MenuItemCreate {
            name: name.to_string(),
            description: String::new(),
            price: 899,
            image_url: None,
            is_available: true,
            category_id: category_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
        })
    }

    #[test]
    fn test_category_delete_cascades_to_its_items_only() {
        let (store, rest_id) = store_with_restaurant();
        let starters = category(&store, &rest_id, "Starters");
        let mains = category(&store, &rest_id, "Mains");
        item(&store, &rest_id, &starters.id, "Bruschetta");
        item(&store, &rest_id, &starters.id, "Caprese Salad");
        let carbonara = item(&store, &rest_id, &mains.id, "Pasta Carbonara");

        store.delete_menu_category(&starters.id);

        let remaining = store.menu_items();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, carbonara.id);
        assert_eq!(store.menu_categories().len(), 1);
    }

    #[test]
    fn test_delete_missing_category_is_a_silent_noop() {
        let (store, rest_id) = store_with_restaurant();
        let cat = category(&store, &rest_id, "Starters");
        item(&store, &rest_id, &cat.id, "Bruschetta");
        let version = store.version("menu_category");

        store.delete_menu_category("cat-unknown");

        assert_eq!(store.menu_items().len(), 1);
        assert_eq!(store.version("menu_category"), version);
    }

    #[test]
    fn test_update_menu_item_is_a_shallow_merge() {
        let (store, rest_id) = store_with_restaurant();
        let cat = category(&store, &rest_id, "Mains");
        let created = item(&store, &rest_id, &cat.id, "Grilled Salmon");

        store.update_menu_item(
            &created.id,
            MenuItemUpdate {
                price: Some(2299),
                is_available: Some(false),
                ..MenuItemUpdate::default()
            },
        );

        let updated = store.menu_item(&created.id).unwrap();
        assert_eq!(updated.price, 2299);
        assert!(!updated.is_available);
        // untouched fields survive
        assert_eq!(updated.name, "Grilled Salmon");
        assert_eq!(updated.category_id, cat.id);
    }

    #[test]
    fn test_promotion_defaults_tag_and_clears_on_disable() {
        let (store, rest_id) = store_with_restaurant();
        let cat = category(&store, &rest_id, "Desserts");
        let tiramisu = item(&store, &rest_id, &cat.id, "Tiramisu");

        store.toggle_item_promotion(&tiramisu.id, true, None);
        let promoted = store.menu_item(&tiramisu.id).unwrap();
        assert!(promoted.is_promoted);
        assert_eq!(promoted.promotion_tag.as_deref(), Some("Special"));

        store.toggle_item_promotion(&tiramisu.id, true, Some("Chef's Pick"));
        assert_eq!(
            store.menu_item(&tiramisu.id).unwrap().promotion_tag.as_deref(),
            Some("Chef's Pick")
        );

        store.toggle_item_promotion(&tiramisu.id, false, None);
        let demoted = store.menu_item(&tiramisu.id).unwrap();
        assert!(!demoted.is_promoted);
        assert_eq!(demoted.promotion_tag, None);
    }

    #[test]
    fn test_bestseller_toggle() {
        let (store, rest_id) = store_with_restaurant();
        let cat = category(&store, &rest_id, "Mains");
        let salmon = item(&store, &rest_id, &cat.id, "Grilled Salmon");

        store.toggle_item_bestseller(&salmon.id, true);
        assert!(store.menu_item(&salmon.id).unwrap().is_bestseller);

        store.toggle_item_bestseller(&salmon.id, false);
        assert!(!store.menu_item(&salmon.id).unwrap().is_bestseller);
    }
}
