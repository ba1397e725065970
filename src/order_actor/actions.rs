//! Status actions for the Order actor.

use crate::dispatch::RiderHandle;
use crate::model::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to `OrderStatus`, which must be the immediate successor
    /// of its current status. `Queued` is refused here; only `Dispatch` queues
    /// an order, so a queued order always has a rider.
    Advance(OrderStatus),
    /// Asks the rider locator for a rider. Only valid once payment is done;
    /// on success the order is queued with the rider recorded on it.
    Dispatch,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    Advance(OrderStatus),
    Dispatch(RiderHandle),
}
