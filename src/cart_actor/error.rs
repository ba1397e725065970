//! Error types for the Cart actor.

use crate::model::{CartKey, CustomerId, FoodItemId, RestaurantId};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// No live cart for this customer and restaurant.
    #[error("Cart not found: {0}")]
    NotFound(CartKey),

    /// The cart's customer does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// The cart's restaurant does not exist.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    /// The restaurant does not offer this item.
    #[error("Item {0} is not on the menu")]
    ItemNotOnMenu(FoodItemId),

    /// The cart holds no line for this item.
    #[error("Item {0} is not in the cart")]
    ItemNotInCart(FoodItemId),

    /// Checkout needs at least one line.
    #[error("Cart is empty: {0}")]
    EmptyCart(CartKey),

    /// An order is being placed for this cart; its lines cannot change.
    #[error("Checkout in progress for {0}")]
    CheckoutInProgress(CartKey),

    /// Quantities start at 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
