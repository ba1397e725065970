//! # Rider Client
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{DeliveryRider, RiderCreate, RiderId, RiderUpdate};
use crate::rider_actor::{RiderAction, RiderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Rider actor.
#[derive(Clone)]
pub struct RiderClient {
    inner: ResourceClient<DeliveryRider>,
}

impl RiderClient {
    pub fn new(inner: ResourceClient<DeliveryRider>) -> Self {
        Self { inner }
    }

    fn map_error_for(id: RiderId, e: FrameworkError) -> RiderError {
        match e {
            FrameworkError::NotFound(_) => RiderError::NotFound(id),
            other => Self::map_error(other),
        }
    }
}

#[async_trait]
impl ActorClient<DeliveryRider> for RiderClient {
    type Error = RiderError;

    fn inner(&self) -> &ResourceClient<DeliveryRider> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<RiderError>()
            .unwrap_or_else(|e| RiderError::ActorCommunicationError(e.to_string()))
    }
}

impl RiderClient {
    #[instrument(skip(self))]
    pub async fn register_rider(&self, params: RiderCreate) -> Result<RiderId, RiderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Moves a rider, changes their range or coverage, or flips duty/occupied.
    #[instrument(skip(self))]
    pub async fn update_rider(
        &self,
        id: RiderId,
        update: RiderUpdate,
    ) -> Result<DeliveryRider, RiderError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }

    #[instrument(skip(self))]
    pub async fn is_available(&self, id: RiderId) -> Result<bool, RiderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, RiderAction::IsAvailable)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn availability_of_unknown_rider() {
        let mut mock = MockClient::<DeliveryRider>::new();
        mock.expect_action(RiderId(3))
            .return_err(FrameworkError::NotFound("rider_3".to_string()));
        let client = RiderClient::new(mock.client());

        let err = client.is_available(RiderId(3)).await.unwrap_err();

        assert_eq!(err, RiderError::NotFound(RiderId(3)));
        mock.verify();
    }

    #[tokio::test]
    async fn availability_is_passed_through() {
        let mut mock = MockClient::<DeliveryRider>::new();
        mock.expect_action(RiderId(1)).return_ok(true);
        let client = RiderClient::new(mock.client());

        assert!(client.is_available(RiderId(1)).await.unwrap());
        mock.verify();
    }
}
