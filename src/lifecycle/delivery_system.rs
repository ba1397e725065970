use crate::clients::{CartClient, CustomerClient, OrderClient, RestaurantClient, RiderClient};
use crate::config::SystemConfig;
use crate::dispatch::{RiderLocator, UnstaffedLocator};
use crate::order_actor::OrderContext;
use crate::pricing::{DiscountPolicy, Pricing};
use std::sync::Arc;
use tracing::{error, info};

/// Runs the five actors and hands out their clients.
///
/// Customers, restaurants and riders stand alone (`Context = ()`). The cart actor
/// gets the customer and restaurant clients; the order actor gets the cart and
/// restaurant clients plus pricing and the rider locator.
///
/// ```rust
/// use food_delivery::lifecycle::DeliverySystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = DeliverySystem::new();
///     let id = system
///         .customer_client
///         .register_customer("Asha")
///         .await
///         .map_err(|e| e.to_string())?;
///     assert_eq!(id.to_string(), "customer_1");
///     system.shutdown().await
/// }
/// ```
pub struct DeliverySystem {
    pub customer_client: CustomerClient,
    pub restaurant_client: RestaurantClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub rider_client: RiderClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeliverySystem {
    /// Default settings, no discount, and a locator that never finds a rider.
    pub fn new() -> Self {
        Self::builder().start()
    }

    pub fn with_config(config: SystemConfig) -> Self {
        Self::builder().config(config).start()
    }

    pub fn builder() -> DeliverySystemBuilder {
        DeliverySystemBuilder::default()
    }

    /// Drops the clients and waits for every actor to drain its queue and stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.cart_client);
        drop(self.customer_client);
        drop(self.restaurant_client);
        drop(self.rider_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}

type LocatorFactory = Box<dyn FnOnce(RiderClient) -> Arc<dyn RiderLocator> + Send>;

/// Collaborators for [`DeliverySystem`]. Anything not set keeps its default.
pub struct DeliverySystemBuilder {
    config: SystemConfig,
    locator: LocatorFactory,
    discount: Option<Arc<dyn DiscountPolicy>>,
}

impl Default for DeliverySystemBuilder {
    fn default() -> Self {
        Self {
            config: SystemConfig::default(),
            locator: Box::new(|_| Arc::new(UnstaffedLocator)),
            discount: None,
        }
    }
}

impl DeliverySystemBuilder {
    pub fn config(mut self, config: SystemConfig) -> Self {
        self.config = config;
        self
    }

    pub fn locator(mut self, locator: Arc<dyn RiderLocator>) -> Self {
        self.locator = Box::new(move |_| locator);
        self
    }

    /// Builds the locator once the rider actor exists, so it can read the
    /// system's own rider registry.
    pub fn locator_with(
        mut self,
        build: impl FnOnce(RiderClient) -> Arc<dyn RiderLocator> + Send + 'static,
    ) -> Self {
        self.locator = Box::new(build);
        self
    }

    /// Replaces the flat discount from the config.
    pub fn discount(mut self, discount: Arc<dyn DiscountPolicy>) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Spawns the actors. Must be called inside a Tokio runtime.
    pub fn start(self) -> DeliverySystem {
        let capacity = self.config.channel_capacity;
        let pricing = match self.discount {
            Some(discount) => Pricing::new(self.config.quantity_rule, discount),
            None => self.config.pricing(),
        };

        let (customer_actor, customer_client) = crate::customer_actor::new(capacity);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(capacity);
        let (rider_actor, rider_client) = crate::rider_actor::new(capacity);
        let locator = (self.locator)(rider_client.clone());
        info!(
            capacity,
            quantity_rule = ?pricing.rule,
            discount = ?pricing.discount,
            ?locator,
            "Starting delivery system"
        );
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let rider_handle = tokio::spawn(rider_actor.run(()));
        let cart_handle = tokio::spawn(
            cart_actor.run((customer_client.clone(), restaurant_client.clone())),
        );
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            carts: cart_client.clone(),
            restaurants: restaurant_client.clone(),
            pricing,
            locator,
        }));

        DeliverySystem {
            customer_client,
            restaurant_client,
            cart_client,
            order_client,
            rider_client,
            handles: vec![
                order_handle,
                cart_handle,
                customer_handle,
                restaurant_handle,
                rider_handle,
            ],
        }
    }
}
