//! ActorEntity trait implementation for the Cart domain type.
//!
//! Carts are keyed by `(customer, restaurant)` rather than by a sequence number,
//! so the actor's get-or-create gives exactly one live cart per pair.
//!
//! `on_create` checks both parties exist; `AddItem` resolves the item against the
//! restaurant's current menu. Both go through the clients in the context.
//!
//! `BeginCheckout` locks the cart and hands back a snapshot in one request, so
//! no edit can slip in between reading the lines and billing them.

use super::actions::{CartAction, CartActionResult};
use super::CartError;
use crate::clients::{CustomerClient, RestaurantClient};
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Cart, CartCreate, CartKey};
use async_trait::async_trait;
use std::num::NonZeroU32;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartKey;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = (CustomerClient, RestaurantClient);
    type Error = CartError;

    fn assign_id(_seq: u32, params: &CartCreate) -> CartKey {
        params.key()
    }

    fn from_create_params(id: CartKey, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (customers, restaurants) = ctx;

        debug!(cart = %self.key, "Validating customer");
        customers
            .get(self.customer_id())
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or(CartError::CustomerNotFound(self.customer_id()))?;

        debug!(cart = %self.key, "Validating restaurant");
        restaurants
            .get(self.restaurant_id())
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or(CartError::RestaurantNotFound(self.restaurant_id()))?;

        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &Self::Context,
    ) -> Result<CartActionResult, Self::Error> {
        if self.locked
            && matches!(action, CartAction::AddItem { .. } | CartAction::RemoveItem(_))
        {
            return Err(CartError::CheckoutInProgress(self.key));
        }

        match action {
            CartAction::AddItem { item_id, quantity } => {
                let quantity =
                    NonZeroU32::new(quantity).ok_or(CartError::InvalidQuantity(quantity))?;

                let (_, restaurants) = ctx;
                let restaurant = restaurants
                    .get(self.restaurant_id())
                    .await
                    .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
                    .ok_or(CartError::RestaurantNotFound(self.restaurant_id()))?;
                let item = restaurant
                    .menu
                    .get(item_id)
                    .ok_or(CartError::ItemNotOnMenu(item_id))?;

                self.set_item(item, quantity);
                let line = self.lines[&item_id].clone();
                Ok(CartActionResult::AddItem(line))
            }
            CartAction::RemoveItem(item_id) => self
                .remove_item(item_id)
                .map(CartActionResult::RemoveItem)
                .ok_or(CartError::ItemNotInCart(item_id)),
            CartAction::BeginCheckout => {
                if self.locked {
                    return Err(CartError::CheckoutInProgress(self.key));
                }
                if self.is_empty() {
                    return Err(CartError::EmptyCart(self.key));
                }
                let snapshot = self.clone();
                self.locked = true;
                debug!(cart = %self.key, lines = self.lines.len(), "Locked for checkout");
                Ok(CartActionResult::BeginCheckout(snapshot))
            }
            CartAction::AbortCheckout => {
                if self.locked {
                    self.locked = false;
                    info!(cart = %self.key, "Checkout aborted, cart unlocked");
                }
                Ok(CartActionResult::AbortCheckout)
            }
        }
    }
}
