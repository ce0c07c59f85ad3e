//! Demo dataset loaded once at store construction
//!
//! Three restaurants with a full menu, tables, staff and orders for
//! Bistro Bella. Ids are fixed short strings so demo flows and docs can
//! reference them; everything created at runtime gets snowflake ids.

use shared::models::{
    DiningTable, MenuCategory, MenuItem, Order, OrderItem, OrderStatus, Restaurant,
    RestaurantWebsite, Staff,
};
use shared::types::Cents;
use shared::util::now_millis;

use crate::config::StoreConfig;
use crate::store::StoreState;

pub(crate) fn demo_state(config: &StoreConfig) -> StoreState {
    let now = now_millis();
    let website = RestaurantWebsite {
        points_per_order: config.points_per_order,
        ..RestaurantWebsite::default()
    };

    let restaurants = vec![
        restaurant("rest1", "Bistro Bella", "bistro-bella", "Isabella Chen", "isabella@bistrobella.com", &website, now),
        restaurant("rest2", "Urban Plate", "urban-plate", "Marcus Johnson", "marcus@urbanplate.com", &website, now),
        restaurant("rest3", "Seaside Grill", "seaside-grill", "Sarah Martinez", "sarah@seasidegrill.com", &website, now),
    ];

    let menu_categories = vec![
        category("cat1", "Appetizers", 1, now),
        category("cat2", "Main Courses", 2, now),
        category("cat3", "Desserts", 3, now),
        category("cat4", "Drinks", 4, now),
    ];

    let menu_items = vec![
        item("item1", "Bruschetta", "Toasted bread topped with tomatoes, garlic, and fresh basil", 899, "cat1", now),
        item("item2", "Caprese Salad", "Fresh mozzarella, tomatoes, and basil with balsamic glaze", 1099, "cat1", now),
        item("item3", "Pasta Carbonara", "Spaghetti with creamy sauce, pancetta, and parmesan", 1699, "cat2", now),
        item("item4", "Grilled Salmon", "Fresh salmon fillet with lemon butter sauce and vegetables", 2299, "cat2", now),
        item("item5", "Tiramisu", "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone", 899, "cat3", now),
        item("item6", "Red Wine", "House selection of red wine, glass", 799, "cat4", now),
    ];

    let dining_tables = vec![
        table("table1", "Table 1", 2, true, now),
        table("table2", "Table 2", 4, false, now),
        table("table3", "Table 3", 6, true, now),
    ];

    let staff = vec![
        staff_member("staff1", "John Smith", "Chef", "john@bistrobella.com", now),
        staff_member("staff2", "Maria Garcia", "Server", "maria@bistrobella.com", now),
        staff_member("staff3", "David Lee", "Host", "david@bistrobella.com", now),
    ];

    let orders = vec![
        Order {
            id: "order1".to_string(),
            table_id: Some("table2".to_string()),
            customer_name: None,
            status: OrderStatus::Pending,
            total: 3697,
            items: vec![
                line("oi1", "order1", "item1", "Bruschetta", 1, 899),
                line("oi2", "order1", "item3", "Pasta Carbonara", 1, 1699),
                line("oi3", "order1", "item6", "Red Wine", 1, 799),
            ],
            restaurant_id: "rest1".to_string(),
            created_at: now,
        },
        Order {
            id: "order2".to_string(),
            table_id: None,
            customer_name: Some("Emma Wilson".to_string()),
            status: OrderStatus::Preparing,
            total: 3198,
            items: vec![
                line("oi4", "order2", "item2", "Caprese Salad", 1, 1099),
                line("oi5", "order2", "item3", "Pasta Carbonara", 1, 1699),
                line("oi6", "order2", "item5", "Tiramisu", 1, 899),
            ],
            restaurant_id: "rest1".to_string(),
            created_at: now,
        },
        Order {
            id: "order3".to_string(),
            table_id: Some("table3".to_string()),
            customer_name: None,
            status: OrderStatus::Completed,
            total: 5397,
            items: vec![
                line("oi7", "order3", "item4", "Grilled Salmon", 1, 2299),
                line("oi8", "order3", "item1", "Bruschetta", 2, 899),
                line("oi9", "order3", "item6", "Red Wine", 2, 799),
            ],
            restaurant_id: "rest1".to_string(),
            created_at: now,
        },
    ];

    StoreState {
        restaurants,
        selected_restaurant_id: Some("rest1".to_string()),
        menu_categories,
        menu_items,
        dining_tables,
        staff,
        orders,
        ..StoreState::default()
    }
}

fn restaurant(
    id: &str,
    name: &str,
    slug: &str,
    owner_name: &str,
    owner_email: &str,
    website: &RestaurantWebsite,
    now: i64,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        owner_name: owner_name.to_string(),
        owner_email: owner_email.to_string(),
        created_at: now,
        website: website.clone(),
    }
}

fn category(id: &str, name: &str, sort_order: i32, now: i64) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        restaurant_id: "rest1".to_string(),
        sort_order,
        created_at: now,
    }
}

fn item(id: &str, name: &str, description: &str, price: Cents, category_id: &str, now: i64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: Some("/placeholder.svg".to_string()),
        is_available: true,
        category_id: category_id.to_string(),
        restaurant_id: "rest1".to_string(),
        created_at: now,
        is_promoted: false,
        promotion_tag: None,
        is_bestseller: false,
    }
}

fn table(id: &str, name: &str, seats: i32, is_available: bool, now: i64) -> DiningTable {
    DiningTable {
        id: id.to_string(),
        name: name.to_string(),
        seats,
        is_available,
        restaurant_id: "rest1".to_string(),
        created_at: now,
    }
}

fn staff_member(id: &str, name: &str, role: &str, email: &str, now: i64) -> Staff {
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        restaurant_id: "rest1".to_string(),
        created_at: now,
    }
}

fn line(
    id: &str,
    order_id: &str,
    menu_item_id: &str,
    menu_item_name: &str,
    quantity: i32,
    price: Cents,
) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        menu_item_id: menu_item_id.to_string(),
        menu_item_name: menu_item_name.to_string(),
        quantity,
        price,
        order_id: order_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_state_shape() {
        let state = demo_state(&StoreConfig::default());
        assert_eq!(state.restaurants.len(), 3);
        assert_eq!(state.menu_categories.len(), 4);
        assert_eq!(state.menu_items.len(), 6);
        assert_eq!(state.dining_tables.len(), 3);
        assert_eq!(state.staff.len(), 3);
        assert_eq!(state.orders.len(), 3);
        assert_eq!(state.selected_restaurant_id.as_deref(), Some("rest1"));
        assert!(state.ingredients.is_empty());
    }

    #[test]
    fn test_demo_orders_reference_seeded_entities() {
        let state = demo_state(&StoreConfig::default());
        for order in &state.orders {
            assert_eq!(order.restaurant_id, "rest1");
            for item in &order.items {
                assert_eq!(item.order_id, order.id);
                assert!(state.menu_items.iter().any(|m| m.id == item.menu_item_id));
            }
        }
    }

    #[test]
    fn test_demo_websites_use_configured_points() {
        let config = StoreConfig {
            points_per_order: 25,
            ..StoreConfig::default()
        };
        let state = demo_state(&config);
        assert!(state
            .restaurants
            .iter()
            .all(|r| r.website.points_per_order == 25));
    }
}
