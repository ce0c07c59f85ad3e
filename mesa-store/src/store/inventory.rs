//! Inventory operations: ingredients, recipe links, stock deduction
//!
//! Recipe links tie menu items to the ingredients they consume. Stock
//! deduction walks an order's line items through those links and debits
//! ingredient stock, floored at zero.

use rust_decimal::Decimal;
use shared::models::{
    Ingredient, IngredientCreate, IngredientUpdate, MenuItemIngredient,
};
use shared::util::{entity_id, now_millis};

use super::RestaurantStore;

impl RestaurantStore {
    // =========================================================================
    // Ingredients
    // =========================================================================

    pub fn add_ingredient(&self, payload: IngredientCreate) -> Ingredient {
        let ingredient = Ingredient {
            id: entity_id("ingr"),
            name: payload.name,
            unit_type: payload.unit_type,
            stock_quantity: payload.stock_quantity,
            low_stock_threshold: payload.low_stock_threshold,
            restaurant_id: payload.restaurant_id,
            cost: payload.cost,
            created_at: now_millis(),
        };
        self.state.write().ingredients.push(ingredient.clone());
        self.versions.increment("ingredient");
        ingredient
    }

    pub fn update_ingredient(&self, ingredient_id: &str, patch: IngredientUpdate) {
        let mut state = self.state.write();
        let Some(ingredient) = state.ingredients.iter_mut().find(|i| i.id == ingredient_id)
        else {
            return;
        };
        if let Some(name) = patch.name {
            ingredient.name = name;
        }
        if let Some(unit_type) = patch.unit_type {
            ingredient.unit_type = unit_type;
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            ingredient.stock_quantity = stock_quantity;
        }
        if let Some(low_stock_threshold) = patch.low_stock_threshold {
            ingredient.low_stock_threshold = low_stock_threshold;
        }
        if let Some(cost) = patch.cost {
            ingredient.cost = cost;
        }
        drop(state);
        self.versions.increment("ingredient");
    }

    /// Delete an ingredient and every recipe link that references it
    pub fn delete_ingredient(&self, ingredient_id: &str) {
        let mut state = self.state.write();
        let before = state.ingredients.len();
        state.ingredients.retain(|i| i.id != ingredient_id);
        if state.ingredients.len() == before {
            return;
        }
        state
            .menu_item_ingredients
            .retain(|link| link.ingredient_id != ingredient_id);
        drop(state);
        self.versions.increment("ingredient");
        self.versions.increment("menu_item_ingredient");
    }

    /// Snapshot of all ingredients
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.state.read().ingredients.clone()
    }

    pub fn ingredient(&self, ingredient_id: &str) -> Option<Ingredient> {
        self.state
            .read()
            .ingredients
            .iter()
            .find(|i| i.id == ingredient_id)
            .cloned()
    }

    /// Ingredients at or below their low-stock threshold (inclusive)
    pub fn low_stock_ingredients(&self) -> Vec<Ingredient> {
        self.state
            .read()
            .ingredients
            .iter()
            .filter(|i| i.stock_quantity <= i.low_stock_threshold)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Recipe links
    // =========================================================================

    /// Upsert the recipe link for a (menu item, ingredient) pair
    ///
    /// At most one link row exists per pair: an existing link gets its
    /// quantity replaced, otherwise a new link is appended.
    pub fn link_ingredient_to_menu_item(
        &self,
        menu_item_id: &str,
        ingredient_id: &str,
        quantity: Decimal,
    ) {
        let mut state = self.state.write();
        if let Some(link) = state
            .menu_item_ingredients
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id && l.ingredient_id == ingredient_id)
        {
            link.quantity = quantity;
        } else {
            state.menu_item_ingredients.push(MenuItemIngredient {
                menu_item_id: menu_item_id.to_string(),
                ingredient_id: ingredient_id.to_string(),
                quantity,
            });
        }
        drop(state);
        self.versions.increment("menu_item_ingredient");
    }

    pub fn unlink_ingredient_from_menu_item(&self, menu_item_id: &str, ingredient_id: &str) {
        let mut state = self.state.write();
        let before = state.menu_item_ingredients.len();
        state
            .menu_item_ingredients
            .retain(|l| !(l.menu_item_id == menu_item_id && l.ingredient_id == ingredient_id));
        if state.menu_item_ingredients.len() == before {
            return;
        }
        drop(state);
        self.versions.increment("menu_item_ingredient");
    }

    /// Replace the quantity on an existing link; no-op if the pair is
    /// not linked (use [`Self::link_ingredient_to_menu_item`] to create)
    pub fn update_menu_item_ingredient(
        &self,
        menu_item_id: &str,
        ingredient_id: &str,
        quantity: Decimal,
    ) {
        let mut state = self.state.write();
        let Some(link) = state
            .menu_item_ingredients
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id && l.ingredient_id == ingredient_id)
        else {
            return;
        };
        link.quantity = quantity;
        drop(state);
        self.versions.increment("menu_item_ingredient");
    }

    /// Snapshot of all recipe links
    pub fn menu_item_ingredients(&self) -> Vec<MenuItemIngredient> {
        self.state.read().menu_item_ingredients.clone()
    }

    // =========================================================================
    // Stock deduction
    // =========================================================================

    /// Debit ingredient stock for every line item of a completed order
    ///
    /// For each line item, each linked ingredient loses
    /// `link.quantity × line.quantity`, floored at zero. Missing order,
    /// unlinked items and already-deleted ingredients are all silent
    /// no-ops. No audit record of the deduction is written.
    ///
    /// Sufficient stock is deliberately NOT validated up front: the
    /// order was already served, so this is bookkeeping after the fact.
    /// A floor hit is logged so an oversell stays observable.
    pub fn deduct_ingredients_from_stock(&self, order_id: &str) {
        let mut state = self.state.write();

        let demands: Vec<(String, Decimal)> = {
            let Some(order) = state.orders.iter().find(|o| o.id == order_id) else {
                return;
            };
            order
                .items
                .iter()
                .flat_map(|line| {
                    state
                        .menu_item_ingredients
                        .iter()
                        .filter(|link| link.menu_item_id == line.menu_item_id)
                        .map(move |link| {
                            (
                                link.ingredient_id.clone(),
                                link.quantity * Decimal::from(line.quantity),
                            )
                        })
                })
                .collect()
        };
        if demands.is_empty() {
            return;
        }

        for (ingredient_id, deduction) in demands {
            if let Some(ingredient) = state
                .ingredients
                .iter_mut()
                .find(|i| i.id == ingredient_id)
            {
                let remaining = ingredient.stock_quantity - deduction;
                if remaining < Decimal::ZERO {
                    tracing::warn!(
                        ingredient_id = %ingredient.id,
                        stock = %ingredient.stock_quantity,
                        deduction = %deduction,
                        "stock floored at zero during deduction"
                    );
                }
                ingredient.stock_quantity = remaining.max(Decimal::ZERO);
            }
        }
        drop(state);
        self.versions.increment("ingredient");
    }
}
