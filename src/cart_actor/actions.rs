//! Line-item and checkout actions for the Cart actor.

use crate::model::{Cart, CartLine, FoodItemId};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Sets the quantity of a menu item. Not additive: the last write wins.
    ///
    /// # Errors
    /// Fails for a zero quantity or an item the restaurant does not offer.
    AddItem { item_id: FoodItemId, quantity: u32 },
    /// Drops the line for an item.
    RemoveItem(FoodItemId),
    /// Locks the cart and returns its contents as they are now.
    ///
    /// Line edits fail until the lock is released or the cart is deleted, so
    /// the snapshot is exactly what gets billed.
    ///
    /// # Errors
    /// Fails for an empty cart or one that is already locked.
    BeginCheckout,
    /// Releases a lock taken by `BeginCheckout`.
    AbortCheckout,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The line as stored after the write.
    AddItem(CartLine),
    /// The line that was removed.
    RemoveItem(CartLine),
    /// The cart's lines at the moment it was locked.
    BeginCheckout(Cart),
    AbortCheckout,
}
