//! ActorEntity trait implementation for the DeliveryRider domain type.

use super::{RiderAction, RiderError};
use crate::framework::ActorEntity;
use crate::model::{DeliveryRider, RiderCreate, RiderId, RiderUpdate};
use async_trait::async_trait;

fn validate_range(range_km: f64) -> Result<(), RiderError> {
    if !range_km.is_finite() || range_km < 0.0 {
        return Err(RiderError::ValidationError(format!(
            "range must be a non-negative distance, got {range_km}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for DeliveryRider {
    type Id = RiderId;
    type Create = RiderCreate;
    type Update = RiderUpdate;
    type Action = RiderAction;
    type ActionResult = bool;
    type Context = ();
    type Error = RiderError;

    fn assign_id(seq: u32, _params: &RiderCreate) -> RiderId {
        RiderId(seq)
    }

    fn from_create_params(id: RiderId, params: RiderCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(RiderError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        validate_range(params.range_km)?;
        Ok(Self::new(id, params))
    }

    /// All fields are checked before any is applied, so a rejected update leaves
    /// the rider untouched.
    async fn on_update(
        &mut self,
        update: RiderUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(range_km) = update.range_km {
            validate_range(range_km)?;
            self.range_km = range_km;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(on_duty) = update.on_duty {
            self.on_duty = on_duty;
        }
        if let Some(occupied) = update.occupied {
            self.occupied = occupied;
        }
        if let Some(postal_codes) = update.postal_codes {
            self.postal_codes = postal_codes;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RiderAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            RiderAction::IsAvailable => Ok(self.is_available()),
        }
    }
}
