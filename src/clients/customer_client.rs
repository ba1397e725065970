//! # Customer Client
//!
//! High-level API for the customer actor.
use crate::customer_actor::{CustomerAction, CustomerError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Address, AddressKind, Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    fn map_error_for(id: CustomerId, e: FrameworkError) -> CustomerError {
        match e {
            FrameworkError::NotFound(_) => CustomerError::NotFound(id),
            other => Self::map_error(other),
        }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CustomerError>()
            .unwrap_or_else(|e| CustomerError::ActorCommunicationError(e.to_string()))
    }
}

impl CustomerClient {
    #[instrument(skip(self, name))]
    pub async fn register_customer(&self, name: impl Into<String>) -> Result<CustomerId, CustomerError> {
        let params = CustomerCreate { name: name.into() };
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }

    /// Saves an address under `kind`. Returns the address it replaced, if any.
    #[instrument(skip(self, address))]
    pub async fn add_address(
        &self,
        id: CustomerId,
        kind: AddressKind,
        address: Address,
    ) -> Result<Option<Address>, CustomerError> {
        debug!(%address, "Sending request");
        self.inner
            .perform_action(id, CustomerAction::AddAddress { kind, address })
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn missing_customer_maps_to_typed_not_found() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_action(CustomerId(4))
            .return_err(FrameworkError::NotFound("customer_4".to_string()));
        let client = CustomerClient::new(mock.client());

        let err = client
            .add_address(CustomerId(4), AddressKind::Office, Address::default())
            .await
            .unwrap_err();

        assert_eq!(err, CustomerError::NotFound(CustomerId(4)));
        mock.verify();
    }

    #[tokio::test]
    async fn entity_errors_survive_the_round_trip() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CustomerError::ValidationError("name must not be empty".to_string()),
            )));
        let client = CustomerClient::new(mock.client());

        let err = client.register_customer("  ").await.unwrap_err();

        assert!(matches!(err, CustomerError::ValidationError(_)));
        mock.verify();
    }
}
