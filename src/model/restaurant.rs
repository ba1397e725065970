//! Restaurants, their menus and the food items on them.
//!
//! # Actor Framework
//! [`Restaurant`] is managed by the restaurant actor; menu edits go through
//! [`RestaurantAction`](crate::restaurant_actor::RestaurantAction).

use crate::model::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

sequential_id!(
    /// Type-safe identifier for Restaurants.
    RestaurantId,
    "restaurant"
);

sequential_id!(
    /// Identifier of a food item, unique within one menu.
    FoodItemId,
    "item"
);

/// A dish offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodItemId,
    pub name: String,
    pub price: f64,
}

impl FoodItem {
    pub fn new(id: FoodItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Raised by [`Menu`] edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    ItemNotFound(FoodItemId),

    #[error("Invalid price {price} for {name}")]
    InvalidPrice { name: String, price: f64 },

    /// The menu already uses the highest item id.
    #[error("No item ids left after {0}")]
    IdsExhausted(FoodItemId),
}

/// The items a restaurant currently offers, keyed by item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: BTreeMap<FoodItemId, FoodItem>,
    next_item_id: u32,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` under its own id, replacing any item with that id.
    pub fn add(&mut self, item: FoodItem) -> Result<Option<FoodItem>, MenuError> {
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(MenuError::InvalidPrice {
                name: item.name,
                price: item.price,
            });
        }
        self.next_item_id = self.next_item_id.max(item.id.0);
        Ok(self.items.insert(item.id, item))
    }

    /// Adds a new item under the next free id.
    pub fn add_new(&mut self, name: impl Into<String>, price: f64) -> Result<FoodItemId, MenuError> {
        let next = self
            .next_item_id
            .checked_add(1)
            .ok_or(MenuError::IdsExhausted(FoodItemId(self.next_item_id)))?;
        let id = FoodItemId(next);
        self.add(FoodItem::new(id, name, price))?;
        Ok(id)
    }

    pub fn remove(&mut self, id: FoodItemId) -> Result<FoodItem, MenuError> {
        self.items.remove(&id).ok_or(MenuError::ItemNotFound(id))
    }

    pub fn get(&self, id: FoodItemId) -> Option<&FoodItem> {
        self.items.get(&id)
    }

    /// Items ordered by id.
    pub fn items(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: Address,
    pub menu: Menu,
}

impl Restaurant {
    /// Creates a restaurant with an empty menu.
    pub fn new(id: RestaurantId, name: impl Into<String>, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            address,
            menu: Menu::new(),
        }
    }

    /// One `id: name ------- price` line per menu item.
    pub fn menu_listing(&self) -> Vec<String> {
        self.menu
            .items()
            .map(|item| format!("{}: {} ------- {}", item.id, item.name, item.price))
            .collect()
    }
}

/// Payload for onboarding a restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: Address,
}

/// Payload for updating a restaurant's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_leaves_menu_empty() {
        let mut menu = Menu::new();
        menu.add(FoodItem::new(FoodItemId(1), "Dosa", 10.0)).unwrap();
        assert_eq!(menu.len(), 1);

        let removed = menu.remove(FoodItemId(1)).unwrap();
        assert_eq!(removed.name, "Dosa");
        assert!(menu.is_empty());
    }

    #[test]
    fn remove_absent_item_is_not_found() {
        let mut menu = Menu::new();
        assert_eq!(
            menu.remove(FoodItemId(9)),
            Err(MenuError::ItemNotFound(FoodItemId(9)))
        );
    }

    #[test]
    fn add_new_never_reuses_an_explicit_id() {
        let mut menu = Menu::new();
        menu.add(FoodItem::new(FoodItemId(5), "Idli", 4.0)).unwrap();
        let id = menu.add_new("Vada", 3.0).unwrap();
        assert_eq!(id, FoodItemId(6));
    }

    #[test]
    fn add_new_after_the_last_id_fails_cleanly() {
        let mut menu = Menu::new();
        menu.add(FoodItem::new(FoodItemId(u32::MAX), "Thali", 12.0))
            .unwrap();

        assert_eq!(
            menu.add_new("Vada", 3.0),
            Err(MenuError::IdsExhausted(FoodItemId(u32::MAX)))
        );
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut menu = Menu::new();
        assert!(matches!(
            menu.add_new("Refund", -1.0),
            Err(MenuError::InvalidPrice { .. })
        ));
        assert!(menu.is_empty());
    }

    #[test]
    fn listing_follows_item_order() {
        let mut restaurant = Restaurant::new(RestaurantId(1), "Udupi", Address::default());
        restaurant.menu.add_new("Dosa", 10.0).unwrap();
        restaurant.menu.add_new("Coffee", 2.5).unwrap();
        assert_eq!(
            restaurant.menu_listing(),
            vec!["item_1: Dosa ------- 10", "item_2: Coffee ------- 2.5"]
        );
    }
}
