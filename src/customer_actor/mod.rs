//! # Customer Actor
//!
//! Registry of customers and their saved addresses. No dependencies
//! (`Context = ()`).
//!
//! ```rust
//! use food_delivery::customer_actor;
//! use food_delivery::model::{Address, AddressKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.register_customer("Asha").await?;
//!     let home = Address::new("12 Park St", "", "Pune", "MH", "India", "411001");
//!     client.add_address(id, AddressKind::Home, home).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::{Address, AddressKind, Customer};

/// Custom actions for Customer entities.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Saves `address` under `kind`, replacing any previous one.
    AddAddress { kind: AddressKind, address: Address },
}

/// Creates a new Customer actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CustomerClient::new(generic_client))
}
