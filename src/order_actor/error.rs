//! Error types for the Order actor.

use crate::dispatch::DispatchError;
use crate::model::{CartKey, OrderId, OrderStatus, RestaurantId};
use crate::payment::PaymentError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// There is no live cart to check out.
    #[error("Cart not found: {0}")]
    CartNotFound(CartKey),

    /// The cart has no items.
    #[error("Cart is empty: {0}")]
    EmptyCart(CartKey),

    /// Another order is already being placed for this cart.
    #[error("Checkout already in progress for {0}")]
    CheckoutInProgress(CartKey),

    /// The payment mode could not be parsed.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The processor did not accept the charge.
    #[error("Payment declined for {0}")]
    PaymentDeclined(OrderId),

    /// Status changes move one step forward at a time, and only dispatch can
    /// queue an order.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The order's restaurant no longer exists.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    /// No rider could be assigned.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
