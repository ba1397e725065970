//! ActorEntity trait implementation for the Order domain type.
//!
//! Checkout runs in [`on_create`](ActorEntity::on_create): the order locks its
//! cart and takes the snapshot in one request, prices it and moves through
//! payment. Failures before the charge discard the order, and a declined charge
//! unlocks the cart again. Once the charge goes through the order is kept even
//! if the cart cannot be cleared.

use super::actions::{OrderAction, OrderActionResult};
use super::{OrderContext, OrderError};
use crate::cart_actor::CartError;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::payment;
use async_trait::async_trait;
use tracing::{debug, info, warn};

impl Order {
    fn advance(&mut self, to: OrderStatus) -> Result<OrderStatus, OrderError> {
        if !self.status.can_advance_to(to) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        debug!(order_id = %self.id, from = %self.status, %to, "Status change");
        self.status = to;
        Ok(to)
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn assign_id(seq: u32, _params: &OrderCreate) -> OrderId {
        OrderId(seq)
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.cart, params.payment_mode))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let key = self.cart.key;

        let snapshot = ctx.carts.begin_checkout(key).await.map_err(|e| match e {
            CartError::NotFound(_) => OrderError::CartNotFound(key),
            CartError::EmptyCart(_) => OrderError::EmptyCart(key),
            CartError::CheckoutInProgress(_) => OrderError::CheckoutInProgress(key),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })?;
        self.cart = snapshot;
        self.total = ctx.pricing.total(&self.cart);
        debug!(order_id = %self.id, total = self.total, "Priced");

        self.advance(OrderStatus::PaymentInProgress)?;
        let processor = payment::processor_for(self.payment_mode);
        self.payment_successful = processor.charge(self.total);
        if !self.payment_successful {
            warn!(order_id = %self.id, mode = %self.payment_mode, "Payment declined");
            if let Err(e) = ctx.carts.abort_checkout(key).await {
                warn!(order_id = %self.id, %key, error = %e, "Cart left locked");
            }
            return Err(OrderError::PaymentDeclined(self.id));
        }
        self.advance(OrderStatus::PaymentDone)?;

        if let Err(e) = ctx.carts.checkout(key).await {
            warn!(order_id = %self.id, %key, error = %e, "Paid, but cart not cleared");
        }
        info!(order_id = %self.id, %key, total = self.total, "Checked out");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Advance(OrderStatus::Queued) => Err(OrderError::InvalidTransition {
                from: self.status,
                to: OrderStatus::Queued,
            }),
            OrderAction::Advance(to) => {
                let status = self.advance(to)?;
                if status == OrderStatus::InDelivery {
                    if let Some(rider) = &self.rider {
                        info!(
                            order_id = %self.id,
                            rider_id = %rider.id,
                            rider = %rider.name,
                            restaurant_id = %self.cart.restaurant_id(),
                            customer_id = %self.cart.customer_id(),
                            "Rider is delivering the order"
                        );
                    }
                }
                Ok(OrderActionResult::Advance(status))
            }
            OrderAction::Dispatch => {
                if !self.status.can_advance_to(OrderStatus::Queued) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: OrderStatus::Queued,
                    });
                }
                let restaurant_id = self.cart.restaurant_id();
                let restaurant = ctx
                    .restaurants
                    .get(restaurant_id)
                    .await
                    .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
                    .ok_or(OrderError::RestaurantNotFound(restaurant_id))?;

                let rider = ctx.locator.nearest_available(&restaurant).await?;
                self.advance(OrderStatus::Queued)?;
                self.rider = Some(rider.clone());
                info!(
                    order_id = %self.id,
                    rider_id = %rider.id,
                    rider = %rider.name,
                    restaurant = %restaurant.name,
                    "Rider assigned"
                );
                Ok(OrderActionResult::Dispatch(rider))
            }
        }
    }
}
