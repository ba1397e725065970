//! # Order Actor
//!
//! Orders, checkout and the delivery status machine.
//!
//! ## Checkout
//!
//! Creating an order *is* checkout. `Order::on_create` locks the cart and takes
//! its contents in one request, prices that snapshot with the configured
//! [`Pricing`], charges it through the processor for the order's payment mode
//! and checks the cart out. Edits sent to the cart meanwhile are refused rather
//! than silently dropped. A stored order is always at least `PAYMENT_DONE`.
//!
//! ## Status
//!
//! ```text
//! PENDING -> PAYMENT_IN_PROGRESS -> PAYMENT_DONE -> QUEUED -> IN_DELIVERY -> DELIVERED
//! ```
//!
//! One step forward at a time, never back. `PAYMENT_DONE -> QUEUED` happens
//! only through [`OrderAction::Dispatch`], which needs a rider from the
//! [`RiderLocator`]; `Advance(Queued)` is rejected.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CartClient, OrderClient, RestaurantClient};
use crate::dispatch::RiderLocator;
use crate::framework::ResourceActor;
use crate::model::Order;
use crate::pricing::Pricing;
use std::sync::Arc;

/// Dependencies injected into the Order actor at `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub carts: CartClient,
    pub restaurants: RestaurantClient,
    pub pricing: Pricing,
    pub locator: Arc<dyn RiderLocator>,
}

/// Creates a new Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, OrderClient::new(generic_client))
}
