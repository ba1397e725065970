//! Error types for the Restaurant actor.

use crate::model::{FoodItemId, MenuError, RestaurantId};
use thiserror::Error;

/// Errors that can occur during restaurant and menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant was not found.
    #[error("Restaurant not found: {0}")]
    NotFound(RestaurantId),

    /// The menu has no item with this id.
    #[error("Menu item not found: {0}")]
    ItemNotFound(FoodItemId),

    /// Prices must be finite and not negative.
    #[error("Invalid price {price} for {name}")]
    InvalidPrice { name: String, price: f64 },

    /// The menu has no free item id left.
    #[error("No item ids left after {0}")]
    MenuFull(FoodItemId),

    /// The restaurant data provided is invalid.
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RestaurantError {
    fn from(msg: String) -> Self {
        RestaurantError::ActorCommunicationError(msg)
    }
}

impl From<MenuError> for RestaurantError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::ItemNotFound(id) => RestaurantError::ItemNotFound(id),
            MenuError::InvalidPrice { name, price } => RestaurantError::InvalidPrice { name, price },
            MenuError::IdsExhausted(last) => RestaurantError::MenuFull(last),
        }
    }
}
