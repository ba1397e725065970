//! # Order Client
//!
//! Checkout and the order status machine.
use crate::dispatch::RiderHandle;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CartKey, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::payment::PaymentMode;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    fn map_error_for(id: OrderId, e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(_) => OrderError::NotFound(id),
            other => Self::map_error(other),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

impl OrderClient {
    /// Checks out the cart under `cart` and pays with `payment_mode`
    /// (`"cash"` or `"credit_card"`, any case).
    ///
    /// An unknown payment mode is rejected before the order actor is involved, so
    /// it leaves the cart untouched. On success the stored order is `PAYMENT_DONE`
    /// and the cart is gone from the registry.
    #[instrument(skip(self), fields(cart = %cart))]
    pub async fn place_order(&self, cart: CartKey, payment_mode: &str) -> Result<OrderId, OrderError> {
        let payment_mode: PaymentMode = payment_mode.parse()?;
        debug!(%payment_mode, "Sending request");
        self.inner
            .create(OrderCreate { cart, payment_mode })
            .await
            .map_err(Self::map_error)
    }

    /// Moves the order one step forward, to `to`.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId, to: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, OrderAction::Advance(to))
            .await
            .map_err(|e| Self::map_error_for(id, e))?;
        match result {
            OrderActionResult::Advance(status) => Ok(status),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// Assigns a rider and queues the order.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, id: OrderId) -> Result<RiderHandle, OrderError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, OrderAction::Dispatch)
            .await
            .map_err(|e| Self::map_error_for(id, e))?;
        match result {
            OrderActionResult::Dispatch(rider) => Ok(rider),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, MockClient};
    use crate::model::{CustomerId, RestaurantId};
    use crate::payment::PaymentError;

    fn cart() -> CartKey {
        CartKey::new(CustomerId(1), RestaurantId(1))
    }

    #[tokio::test]
    async fn place_order_parses_payment_mode() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.place_order(cart(), "Credit_Card").await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.cart, cart());
        assert_eq!(params.payment_mode, PaymentMode::CreditCard);
        responder.send(Ok(OrderId(1))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), OrderId(1));
    }

    #[tokio::test]
    async fn unknown_payment_mode_never_reaches_the_actor() {
        let mock = MockClient::<Order>::new();
        let order_client = OrderClient::new(mock.client());

        let err = order_client.place_order(cart(), "bogus").await.unwrap_err();

        assert_eq!(
            err,
            OrderError::Payment(PaymentError::InvalidPaymentMode("bogus".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn rejected_transition_is_typed() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(5))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::InvalidTransition {
                    from: OrderStatus::Queued,
                    to: OrderStatus::PaymentDone,
                },
            )));
        let order_client = OrderClient::new(mock.client());

        let err = order_client
            .advance(OrderId(5), OrderStatus::PaymentDone)
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::InvalidTransition { .. }));
        mock.verify();
    }
}
