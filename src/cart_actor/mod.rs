//! # Cart Actor
//!
//! The cart registry: at most one live cart per (customer, restaurant) pair.
//!
//! ## Identity
//!
//! A cart's key *is* the pair ([`CartKey`](crate::model::CartKey)), and lookups go
//! through the framework's get-or-create request. The actor handles requests one
//! at a time, so two tasks asking for the same pair at once still end up sharing
//! a single cart.
//!
//! ## Dependencies
//!
//! `Context = (CustomerClient, RestaurantClient)`: creation checks both parties
//! exist, and adding an item looks it up on the restaurant's current menu.
//!
//! ## Lifetime
//!
//! A cart lives until an order is placed for it. Placing the order locks the
//! cart and bills the locked snapshot; once payment goes through the cart is
//! checked out (deleted) and the next lookup for the pair opens a fresh one. A
//! declined payment unlocks it again. Edits sent while the cart is locked fail
//! with [`CartError::CheckoutInProgress`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CartClient::new(generic_client))
}
