use crate::model::{CustomerId, FoodItem, FoodItemId, RestaurantId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::num::NonZeroU32;

/// Identifies a cart: one per customer per restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartKey {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
}

impl CartKey {
    pub fn new(customer_id: CustomerId, restaurant_id: RestaurantId) -> Self {
        Self {
            customer_id,
            restaurant_id,
        }
    }
}

impl Display for CartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}_{}", self.customer_id.0, self.restaurant_id.0)
    }
}

/// One item in a cart, with the name and price it had when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: FoodItemId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// Items a customer has picked from one restaurant.
///
/// # Actor Framework
/// Managed by the cart actor, which keeps at most one cart per [`CartKey`].
/// While an order is being paid for, the cart is locked and its lines are
/// read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub key: CartKey,
    pub lines: BTreeMap<FoodItemId, CartLine>,
    pub locked: bool,
}

impl Cart {
    pub fn new(key: CartKey) -> Self {
        Self {
            key,
            lines: BTreeMap::new(),
            locked: false,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.key.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.key.restaurant_id
    }

    /// Sets the quantity for `item`. A later call for the same item overwrites
    /// the earlier quantity rather than adding to it.
    pub fn set_item(&mut self, item: &FoodItem, quantity: NonZeroU32) {
        self.lines.insert(
            item.id,
            CartLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: quantity.get(),
            },
        );
    }

    pub fn remove_item(&mut self, item_id: FoodItemId) -> Option<CartLine> {
        self.lines.remove(&item_id)
    }

    pub fn quantity_of(&self, item_id: FoodItemId) -> Option<u32> {
        self.lines.get(&item_id).map(|line| line.quantity)
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Payload for looking up or opening a cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
}

impl CartCreate {
    pub fn key(&self) -> CartKey {
        CartKey::new(self.customer_id, self.restaurant_id)
    }
}
