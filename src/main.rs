//! Demo: one restaurant, one customer, one cash order.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! DELIVERY_QUANTITY_RULE=multiply RUST_LOG=info cargo run
//! ```

use food_delivery::config::SystemConfig;
use food_delivery::framework::ActorClient;
use food_delivery::lifecycle::{setup_tracing, DeliverySystem};
use food_delivery::model::{Address, AddressKind, GeoPoint, OrderStatus};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting food delivery demo");
    let system = DeliverySystem::with_config(config);

    let span = tracing::info_span!("catalog");
    let (restaurant_id, dosa, coffee) = async {
        let address = Address::new("4 MG Road", "", "Bengaluru", "KA", "India", "560001")
            .at(GeoPoint::new(12.9756, 77.6050));
        let restaurant_id = system
            .restaurant_client
            .create_restaurant("Udupi Corner", address)
            .await
            .map_err(|e| e.to_string())?;
        let dosa = system
            .restaurant_client
            .add_menu_item(restaurant_id, "Masala Dosa", 10.0)
            .await
            .map_err(|e| e.to_string())?;
        let coffee = system
            .restaurant_client
            .add_menu_item(restaurant_id, "Filter Coffee", 20.0)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((restaurant_id, dosa, coffee))
    }
    .instrument(span)
    .await?;

    if let Ok(Some(restaurant)) = system.restaurant_client.get(restaurant_id).await {
        for line in restaurant.menu_listing() {
            info!("{line}");
        }
    }

    let span = tracing::info_span!("customer");
    let customer_id = async {
        let customer_id = system
            .customer_client
            .register_customer("Asha")
            .await
            .map_err(|e| e.to_string())?;
        let home = Address::new("12 Park St", "", "Bengaluru", "KA", "India", "560002");
        system
            .customer_client
            .add_address(customer_id, AddressKind::Home, home)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(customer_id)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("cart");
    let cart_key = async {
        let (key, _) = system
            .cart_client
            .get_or_create_cart(customer_id, restaurant_id)
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_item(key, dosa, 1)
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_item(key, coffee, 1)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(key)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let order_result = async {
        info!(cart = %cart_key, "Placing order");
        system.order_client.place_order(cart_key, "cash").await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => {
            if let Ok(Some(order)) = system.order_client.get(order_id).await {
                info!(
                    %order_id,
                    total = order.total,
                    paid = order.payment_successful,
                    status = %order.status,
                    "Order placed"
                );
            }
            match system.order_client.dispatch(order_id).await {
                Ok(rider) => info!(%order_id, rider = %rider.name, "Dispatched"),
                Err(e) => warn!(%order_id, error = %e, "Dispatch failed"),
            }
            if let Err(e) = system
                .order_client
                .advance(order_id, OrderStatus::PaymentDone)
                .await
            {
                info!(error = %e, "Status cannot move backwards");
            }
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
