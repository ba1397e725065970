//! ActorEntity trait implementation for the Customer domain type.

use super::{CustomerAction, CustomerError};
use crate::framework::ActorEntity;
use crate::model::{Address, Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = Option<Address>;
    type Context = ();
    type Error = CustomerError;

    fn assign_id(seq: u32, _params: &CustomerCreate) -> CustomerId {
        CustomerId(seq)
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        Ok(Self::new(id, params.name))
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        Ok(())
    }

    /// `AddAddress` replaces whatever was stored under the same kind and
    /// returns the replaced address.
    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &Self::Context,
    ) -> Result<Option<Address>, Self::Error> {
        match action {
            CustomerAction::AddAddress { kind, address } => Ok(self.set_address(kind, address)),
        }
    }
}
