//! # Rider Actor
//!
//! Registry of delivery riders: where they are, how far they travel, which postal
//! codes they serve and whether they are on duty or busy. Riders start off duty.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RiderClient;
use crate::framework::ResourceActor;
use crate::model::DeliveryRider;

/// Custom actions for DeliveryRider entities.
#[derive(Debug, Clone)]
pub enum RiderAction {
    /// On duty and not occupied.
    IsAvailable,
}

/// Creates a new Rider actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<DeliveryRider>, RiderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, RiderClient::new(generic_client))
}
