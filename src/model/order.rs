//! Placed orders and their delivery status.
//!
//! # Actor Framework
//! [`Order`] implements [`ActorEntity`](crate::framework::ActorEntity) and is
//! managed by a [`ResourceActor`](crate::framework::ResourceActor). Creation
//! takes an [`OrderCreate`]; status changes and dispatch go through
//! [`OrderAction`](crate::order_actor::OrderAction).

use crate::dispatch::RiderHandle;
use crate::model::{Cart, CartKey};
use crate::payment::PaymentMode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

sequential_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// Where an order is in its life. Variants are declared in the only order
/// they may be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    PaymentInProgress,
    PaymentDone,
    Queued,
    InDelivery,
    Delivered,
}

impl OrderStatus {
    /// The status that follows this one, `None` once delivered.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::PaymentInProgress),
            OrderStatus::PaymentInProgress => Some(OrderStatus::PaymentDone),
            OrderStatus::PaymentDone => Some(OrderStatus::Queued),
            OrderStatus::Queued => Some(OrderStatus::InDelivery),
            OrderStatus::InDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// True only for the immediate successor.
    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::PaymentInProgress => "PAYMENT_IN_PROGRESS",
            OrderStatus::PaymentDone => "PAYMENT_DONE",
            OrderStatus::Queued => "QUEUED",
            OrderStatus::InDelivery => "IN_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    /// Snapshot of the cart taken at checkout.
    pub cart: Cart,
    pub payment_mode: PaymentMode,
    pub payment_successful: bool,
    pub total: f64,
    pub status: OrderStatus,
    pub rider: Option<RiderHandle>,
}

impl Order {
    /// A pending order for `cart`. Lines, total and payment are filled in at checkout.
    pub fn new(id: OrderId, cart: CartKey, payment_mode: PaymentMode) -> Self {
        Self {
            id,
            cart: Cart::new(cart),
            payment_mode,
            payment_successful: false,
            total: 0.0,
            status: OrderStatus::Pending,
            rider: None,
        }
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart: CartKey,
    pub payment_mode: PaymentMode,
}
