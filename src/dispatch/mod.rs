//! # Rider Dispatch
//!
//! Assigning a rider to a paid order goes through a [`RiderLocator`]. How a rider
//! is chosen for a restaurant is left to the locator; the crate ships only
//! [`UnstaffedLocator`], which never finds one. Deployments plug their own
//! locator into [`DeliverySystem`](crate::lifecycle::DeliverySystem).

pub mod error;

pub use error::*;

use crate::model::{Restaurant, RiderId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// The rider recorded on an order once dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderHandle {
    pub id: RiderId,
    pub name: String,
}

/// Finds a rider to pick up from `restaurant`.
#[async_trait]
pub trait RiderLocator: Send + Sync + Debug {
    async fn nearest_available(&self, restaurant: &Restaurant) -> Result<RiderHandle, DispatchError>;
}

/// Locator with nobody on its roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnstaffedLocator;

#[async_trait]
impl RiderLocator for UnstaffedLocator {
    async fn nearest_available(&self, restaurant: &Restaurant) -> Result<RiderHandle, DispatchError> {
        debug!(restaurant_id = %restaurant.id, "No riders on the roster");
        Err(DispatchError::NoRiderAvailable(restaurant.id))
    }
}
