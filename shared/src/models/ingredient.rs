//! Ingredient & Recipe Link Models

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Cents, Timestamp};

/// Stock unit of measure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Kg,
    Liters,
    Pieces,
    Grams,
    Ml,
    Oz,
    Lbs,
}

impl UnitType {
    /// Lowercase wire name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Kg => "kg",
            UnitType::Liters => "liters",
            UnitType::Pieces => "pieces",
            UnitType::Grams => "grams",
            UnitType::Ml => "ml",
            UnitType::Oz => "oz",
            UnitType::Lbs => "lbs",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown unit name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid unit type: {0}")]
pub struct InvalidUnitType(pub String);

impl FromStr for UnitType {
    type Err = InvalidUnitType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(UnitType::Kg),
            "liters" => Ok(UnitType::Liters),
            "pieces" => Ok(UnitType::Pieces),
            "grams" => Ok(UnitType::Grams),
            "ml" => Ok(UnitType::Ml),
            "oz" => Ok(UnitType::Oz),
            "lbs" => Ok(UnitType::Lbs),
            _ => Err(InvalidUnitType(s.to_string())),
        }
    }
}

/// Ingredient entity
///
/// Stock quantities are decimals because kg/liter stock is fractional.
/// `stock_quantity` is clamped at zero on deduction and is never negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit_type: UnitType,
    pub stock_quantity: Decimal,
    /// Inclusive boundary: stock equal to the threshold counts as low
    pub low_stock_threshold: Decimal,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    /// Cost per unit in cents
    pub cost: Cents,
    pub created_at: Timestamp,
}

/// Create ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub unit_type: UnitType,
    pub stock_quantity: Decimal,
    pub low_stock_threshold: Decimal,
    pub restaurant_id: String,
    pub cost: Cents,
}

/// Update ingredient payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub unit_type: Option<UnitType>,
    pub stock_quantity: Option<Decimal>,
    pub low_stock_threshold: Option<Decimal>,
    pub cost: Option<Cents>,
}

/// Recipe link: quantity of an ingredient consumed per unit of a menu item
///
/// The (menu_item_id, ingredient_id) pair is the composite key — at most
/// one link row exists per pair (upsert semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemIngredient {
    /// Menu item reference (String ID)
    pub menu_item_id: String,
    /// Ingredient reference (String ID)
    pub ingredient_id: String,
    pub quantity: Decimal,
}
