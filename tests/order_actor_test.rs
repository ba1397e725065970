use async_trait::async_trait;
use food_delivery::cart_actor::{CartActionResult, CartError};
use food_delivery::clients::{CartClient, RestaurantClient};
use food_delivery::dispatch::{DispatchError, RiderHandle, RiderLocator, UnstaffedLocator};
use food_delivery::framework::{mock::MockClient, ActorClient, FrameworkError};
use food_delivery::model::{
    Address, Cart, CartKey, CustomerId, FoodItem, FoodItemId, OrderStatus, Restaurant,
    RestaurantId, RiderId,
};
use food_delivery::order_actor::{OrderContext, OrderError};
use food_delivery::pricing::Pricing;
use std::num::NonZeroU32;
use std::sync::Arc;

fn key() -> CartKey {
    CartKey::new(CustomerId(1), RestaurantId(1))
}

fn filled_cart() -> Cart {
    let mut cart = Cart::new(key());
    let one = NonZeroU32::new(1).unwrap();
    cart.set_item(&FoodItem::new(FoodItemId(1), "Masala Dosa", 10.0), one);
    cart.set_item(&FoodItem::new(FoodItemId(2), "Filter Coffee", 20.0), one);
    cart
}

#[derive(Debug)]
struct FixedLocator(RiderHandle);

#[async_trait]
impl RiderLocator for FixedLocator {
    async fn nearest_available(&self, _restaurant: &Restaurant) -> Result<RiderHandle, DispatchError> {
        Ok(self.0.clone())
    }
}

/// Real Order actor with mocked Cart and Restaurant dependencies.
///
/// Checkout (`Order::on_create`) locks the cart, which returns its snapshot,
/// and deletes it once paid; dispatch reads the restaurant and asks the locator.
#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut cart_mock = MockClient::<Cart>::new();
    let mut restaurant_mock = MockClient::<Restaurant>::new();

    cart_mock
        .expect_action(key())
        .return_ok(CartActionResult::BeginCheckout(filled_cart()));
    cart_mock.expect_delete(key()).return_ok();
    restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(Restaurant::new(
            RestaurantId(1),
            "Udupi Corner",
            Address::default(),
        )));

    let rider = RiderHandle {
        id: RiderId(3),
        name: "Meena".to_string(),
    };
    let context = OrderContext {
        carts: CartClient::new(cart_mock.client()),
        restaurants: RestaurantClient::new(restaurant_mock.client()),
        pricing: Pricing::default(),
        locator: Arc::new(FixedLocator(rider.clone())),
    };

    let (order_actor, order_client) = food_delivery::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(context));

    let order_id = order_client
        .place_order(key(), "cash")
        .await
        .expect("Order creation failed");
    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.total, 30.0);
    assert_eq!(order.status, OrderStatus::PaymentDone);
    assert_eq!(order.cart, filled_cart());

    assert_eq!(order_client.dispatch(order_id).await.unwrap(), rider);
    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Queued);

    cart_mock.verify();
    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// A checkout that fails before payment stores nothing.
#[tokio::test]
async fn test_cart_lookup_failure_discards_order() {
    let mut cart_mock = MockClient::<Cart>::new();
    let restaurant_mock = MockClient::<Restaurant>::new();

    cart_mock
        .expect_action(key())
        .return_err(FrameworkError::NotFound(key().to_string()));
    cart_mock
        .expect_action(key())
        .return_err(FrameworkError::EntityError(Box::new(CartError::EmptyCart(
            key(),
        ))));
    cart_mock
        .expect_action(key())
        .return_err(FrameworkError::EntityError(Box::new(
            CartError::CheckoutInProgress(key()),
        )));
    cart_mock
        .expect_action(key())
        .return_err(FrameworkError::ActorClosed);

    let context = OrderContext {
        carts: CartClient::new(cart_mock.client()),
        restaurants: RestaurantClient::new(restaurant_mock.client()),
        pricing: Pricing::default(),
        locator: Arc::new(UnstaffedLocator),
    };
    let (order_actor, order_client) = food_delivery::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(context));

    let err = order_client.place_order(key(), "cash").await.unwrap_err();
    assert_eq!(err, OrderError::CartNotFound(key()));

    let err = order_client.place_order(key(), "cash").await.unwrap_err();
    assert_eq!(err, OrderError::EmptyCart(key()));

    let err = order_client.place_order(key(), "cash").await.unwrap_err();
    assert_eq!(err, OrderError::CheckoutInProgress(key()));

    let err = order_client.place_order(key(), "cash").await.unwrap_err();
    assert!(matches!(err, OrderError::ActorCommunicationError(_)));

    assert!(order_client.list().await.unwrap().is_empty());
    cart_mock.verify();
    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// Once the charge has gone through, the order is kept even if the cart
/// cannot be cleared afterwards.
#[tokio::test]
async fn test_paid_order_survives_failed_cart_cleanup() {
    let mut cart_mock = MockClient::<Cart>::new();
    let restaurant_mock = MockClient::<Restaurant>::new();

    cart_mock
        .expect_action(key())
        .return_ok(CartActionResult::BeginCheckout(filled_cart()));
    cart_mock
        .expect_delete(key())
        .return_err(FrameworkError::ActorClosed);

    let context = OrderContext {
        carts: CartClient::new(cart_mock.client()),
        restaurants: RestaurantClient::new(restaurant_mock.client()),
        pricing: Pricing::default(),
        locator: Arc::new(UnstaffedLocator),
    };
    let (order_actor, order_client) = food_delivery::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(context));

    let order_id = order_client
        .place_order(key(), "credit_card")
        .await
        .expect("paid order must be stored");
    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert!(order.payment_successful);
    assert_eq!(order.status, OrderStatus::PaymentDone);
    assert_eq!(order.total, 30.0);

    cart_mock.verify();
    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
