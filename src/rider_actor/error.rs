//! Error types for the Rider actor.

use crate::model::RiderId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiderError {
    #[error("Rider not found: {0}")]
    NotFound(RiderId),

    #[error("Rider validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RiderError {
    fn from(msg: String) -> Self {
        RiderError::ActorCommunicationError(msg)
    }
}
