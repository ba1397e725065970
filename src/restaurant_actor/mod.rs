//! # Restaurant Actor
//!
//! The catalog: restaurants and the menus they own. Menu edits are custom
//! actions ([`RestaurantAction`]) so they stay serialized with every other
//! request for the same restaurant.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Restaurant`]
//! - [`error`] - [`RestaurantError`]
//! - [`actions`] - [`RestaurantAction`] and [`RestaurantActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust
//! use food_delivery::restaurant_actor;
//! use food_delivery::model::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = restaurant_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_restaurant("Udupi Corner", Address::default()).await?;
//!     let dosa = client.add_menu_item(id, "Masala Dosa", 10.0).await?;
//!     assert_eq!(client.menu(id).await?.len(), 1);
//!
//!     client.remove_menu_item(id, dosa).await?;
//!     assert!(client.menu(id).await?.is_empty());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;

/// Creates a new Restaurant actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, RestaurantClient::new(generic_client))
}
