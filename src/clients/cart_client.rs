//! # Cart Client
//!
//! The cart registry API. [`CartClient::get_or_create_cart`] is the only way to
//! open a cart, so the same (customer, restaurant) pair always lands on the same
//! cart until it is checked out.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartKey, CartLine, CustomerId, FoodItemId, RestaurantId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    fn map_error_for(key: CartKey, e: FrameworkError) -> CartError {
        match e {
            FrameworkError::NotFound(_) => CartError::NotFound(key),
            other => Self::map_error(other),
        }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

impl CartClient {
    /// Returns the live cart for the pair, opening one if there is none.
    ///
    /// The flag is `true` when this call created the cart.
    #[instrument(skip(self))]
    pub async fn get_or_create_cart(
        &self,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
    ) -> Result<(CartKey, bool), CartError> {
        debug!("Sending request");
        self.inner
            .get_or_create(CartCreate {
                customer_id,
                restaurant_id,
            })
            .await
            .map_err(Self::map_error)
    }

    /// Sets the quantity for a menu item; the previous quantity is replaced.
    #[instrument(skip(self), fields(cart = %key))]
    pub async fn add_item(
        &self,
        key: CartKey,
        item_id: FoodItemId,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(key, CartAction::AddItem { item_id, quantity })
            .await
            .map_err(|e| Self::map_error_for(key, e))?;
        match result {
            CartActionResult::AddItem(line) => Ok(line),
            other => Err(CartError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self), fields(cart = %key))]
    pub async fn remove_item(&self, key: CartKey, item_id: FoodItemId) -> Result<CartLine, CartError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(key, CartAction::RemoveItem(item_id))
            .await
            .map_err(|e| Self::map_error_for(key, e))?;
        match result {
            CartActionResult::RemoveItem(line) => Ok(line),
            other => Err(CartError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// Snapshot of the live cart, if any.
    pub async fn cart(&self, key: CartKey) -> Result<Option<Cart>, CartError> {
        self.get(key).await
    }

    /// Locks the cart against edits and returns what it holds.
    #[instrument(skip(self), fields(cart = %key))]
    pub async fn begin_checkout(&self, key: CartKey) -> Result<Cart, CartError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(key, CartAction::BeginCheckout)
            .await
            .map_err(|e| Self::map_error_for(key, e))?;
        match result {
            CartActionResult::BeginCheckout(cart) => Ok(cart),
            other => Err(CartError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// Unlocks a cart after a checkout that did not go through.
    #[instrument(skip(self), fields(cart = %key))]
    pub async fn abort_checkout(&self, key: CartKey) -> Result<(), CartError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(key, CartAction::AbortCheckout)
            .await
            .map_err(|e| Self::map_error_for(key, e))?;
        match result {
            CartActionResult::AbortCheckout => Ok(()),
            other => Err(CartError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// Removes the cart from the registry.
    #[instrument(skip(self), fields(cart = %key))]
    pub async fn checkout(&self, key: CartKey) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner
            .delete(key)
            .await
            .map_err(|e| Self::map_error_for(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get_or_create, MockClient};

    fn key() -> CartKey {
        CartKey::new(CustomerId(1), RestaurantId(2))
    }

    #[tokio::test]
    async fn get_or_create_sends_the_pair() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .get_or_create_cart(CustomerId(1), RestaurantId(2))
                .await
        });

        let (params, responder) = expect_get_or_create(&mut receiver)
            .await
            .expect("Expected GetOrCreate request");
        assert_eq!(params.key(), key());
        responder.send(Ok((key(), true))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), (key(), true));
    }

    #[tokio::test]
    async fn add_item_passes_quantity_through() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task =
            tokio::spawn(async move { cart_client.add_item(key(), FoodItemId(1), 3).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, key());
        let CartAction::AddItem { item_id, quantity } = action else {
            panic!("Expected AddItem, got {action:?}");
        };
        assert_eq!((item_id, quantity), (FoodItemId(1), 3));
        let line = CartLine {
            item_id,
            name: "Dosa".to_string(),
            unit_price: 10.0,
            quantity,
        };
        responder
            .send(Ok(CartActionResult::AddItem(line.clone())))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), line);
    }

    #[tokio::test]
    async fn begin_checkout_returns_the_locked_snapshot() {
        let mut mock = MockClient::<Cart>::new();
        let mut cart = Cart::new(key());
        cart.set_item(
            &crate::model::FoodItem::new(FoodItemId(1), "Dosa", 10.0),
            std::num::NonZeroU32::new(2).unwrap(),
        );
        mock.expect_action(key())
            .return_ok(CartActionResult::BeginCheckout(cart.clone()));
        mock.expect_action(key()).return_err(FrameworkError::EntityError(Box::new(
            CartError::CheckoutInProgress(key()),
        )));
        let cart_client = CartClient::new(mock.client());

        assert_eq!(cart_client.begin_checkout(key()).await.unwrap(), cart);
        assert_eq!(
            cart_client.begin_checkout(key()).await.unwrap_err(),
            CartError::CheckoutInProgress(key())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn checkout_of_missing_cart_is_not_found() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_delete(key())
            .return_err(FrameworkError::NotFound(key().to_string()));
        let cart_client = CartClient::new(mock.client());

        let err = cart_client.checkout(key()).await.unwrap_err();

        assert_eq!(err, CartError::NotFound(key()));
        mock.verify();
    }
}
