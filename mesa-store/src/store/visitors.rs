//! Microsite visitor statistics
//!
//! Stats live inside the restaurant record, so page-visit recording
//! touches exactly one copy of the data (the current-restaurant view is
//! derived, never duplicated).

use shared::models::{ItemViewCount, VisitorStatsUpdate};
use shared::util::now_millis;

use super::RestaurantStore;

/// Ranking cap for the per-site top-items list
const TOP_ITEMS_CAP: usize = 10;

impl RestaurantStore {
    /// Record one page view on a restaurant's microsite
    ///
    /// Always increments total visits; unique visitors only when the
    /// analytics snippet flags a first-time client. When a menu item
    /// page was viewed, its view counter is bumped (created at 1 if
    /// absent) and the ranking is re-sorted descending and truncated to
    /// the ten highest.
    pub fn record_page_visit(
        &self,
        restaurant_id: &str,
        is_unique: bool,
        item_viewed: Option<&str>,
    ) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        let stats = &mut restaurant.website.visitor_stats;
        stats.total_visits += 1;
        if is_unique {
            stats.unique_visitors += 1;
        }
        if let Some(item_id) = item_viewed {
            if let Some(entry) = stats.top_items.iter_mut().find(|e| e.item_id == item_id) {
                entry.views += 1;
            } else {
                stats.top_items.push(ItemViewCount {
                    item_id: item_id.to_string(),
                    views: 1,
                });
            }
            stats.top_items.sort_by(|a, b| b.views.cmp(&a.views));
            stats.top_items.truncate(TOP_ITEMS_CAP);
        }
        stats.last_updated = now_millis();
        drop(state);
        self.versions.increment("restaurant");
    }

    /// Patch stats wholesale (analytics import), stamping `last_updated`
    pub fn update_visitor_stats(&self, restaurant_id: &str, patch: VisitorStatsUpdate) {
        let mut state = self.state.write();
        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == restaurant_id)
        else {
            return;
        };
        let stats = &mut restaurant.website.visitor_stats;
        if let Some(total_visits) = patch.total_visits {
            stats.total_visits = total_visits;
        }
        if let Some(unique_visitors) = patch.unique_visitors {
            stats.unique_visitors = unique_visitors;
        }
        if let Some(average_time_on_page) = patch.average_time_on_page {
            stats.average_time_on_page = average_time_on_page;
        }
        if let Some(top_items) = patch.top_items {
            stats.top_items = top_items;
        }
        stats.last_updated = now_millis();
        drop(state);
        self.versions.increment("restaurant");
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

    fn stats(store: &RestaurantStore, rest_id: &str) -> shared::models::VisitorStats {
        store.restaurant(rest_id).unwrap().website.visitor_stats
    }

    #[test]
    fn test_unique_flag_gates_unique_visitors_only() {
        let (store, rest_id) = store_with_restaurant();
        store.record_page_visit(&rest_id, true, None);
        store.record_page_visit(&rest_id, false, None);
        store.record_page_visit(&rest_id, false, None);

        let s = stats(&store, &rest_id);
        assert_eq!(s.total_visits, 3);
        assert_eq!(s.unique_visitors, 1);
    }

    #[test]
    fn test_item_views_rank_descending() {
        let (store, rest_id) = store_with_restaurant();
        store.record_page_visit(&rest_id, false, Some("item1"));
        store.record_page_visit(&rest_id, false, Some("item3"));
        store.record_page_visit(&rest_id, false, Some("item3"));

        let s = stats(&store, &rest_id);
        assert_eq!(s.top_items[0].item_id, "item3");
        assert_eq!(s.top_items[0].views, 2);
        assert_eq!(s.top_items[1].item_id, "item1");
    }

    #[test]
    fn test_top_items_truncate_to_ten() {
        let (store, rest_id) = store_with_restaurant();
        store.record_page_visit(&rest_id, false, Some("item-star"));
        store.record_page_visit(&rest_id, false, Some("item-star"));
        for i in 0..10 {
            store.record_page_visit(&rest_id, false, Some(&format!("item{i}")));
        }

        let s = stats(&store, &rest_id);
        assert_eq!(s.top_items.len(), 10);
        assert_eq!(s.top_items[0].item_id, "item-star");
        assert_eq!(s.top_items[0].views, 2);
    }

    #[test]
    fn test_visit_to_unknown_restaurant_is_a_noop() {
        let (store, rest_id) = store_with_restaurant();
        store.record_page_visit("rest-unknown", true, Some("item1"));
        assert_eq!(stats(&store, &rest_id).total_visits, 0);
    }

    #[test]
    fn test_stats_patch_stamps_last_updated() {
        let (store, rest_id) = store_with_restaurant();
        let before = stats(&store, &rest_id).last_updated;

        store.update_visitor_stats(
            &rest_id,
            VisitorStatsUpdate {
                total_visits: Some(1200),
                average_time_on_page: Some(74.5),
                ..VisitorStatsUpdate::default()
            },
        );

        let s = stats(&store, &rest_id);
        assert_eq!(s.total_visits, 1200);
        assert_eq!(s.average_time_on_page, 74.5);
        assert!(s.last_updated >= before);
    }
}
