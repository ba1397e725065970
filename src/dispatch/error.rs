//! Error types for rider dispatch.

use crate::model::RestaurantId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// No rider could be found for the restaurant.
    #[error("No rider available for {0}")]
    NoRiderAvailable(RestaurantId),

    /// The locator itself failed (e.g. could not reach the rider registry).
    #[error("Rider lookup failed: {0}")]
    LookupFailed(String),
}
