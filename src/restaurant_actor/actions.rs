//! Menu actions for the Restaurant actor.
//!
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`Restaurant`](crate::model::Restaurant).

use crate::model::{FoodItem, FoodItemId};

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Adds a dish under the next free item id.
    ///
    /// # Errors
    /// Fails if `price` is negative or not finite.
    AddMenuItem { name: String, price: f64 },
    /// Takes a dish off the menu.
    ///
    /// # Errors
    /// Fails if the menu has no item with this id.
    RemoveMenuItem(FoodItemId),
    /// Lists the menu ordered by item id.
    Menu,
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone)]
pub enum RestaurantActionResult {
    AddMenuItem(FoodItemId),
    RemoveMenuItem(FoodItem),
    Menu(Vec<FoodItem>),
}
