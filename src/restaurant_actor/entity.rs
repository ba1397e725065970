//! ActorEntity trait implementation for the Restaurant domain type.
//!
//! Menu edits run inside the restaurant's own actor, so two concurrent
//! `AddMenuItem` requests can never hand out the same item id.

use super::actions::{RestaurantAction, RestaurantActionResult};
use super::RestaurantError;
use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use async_trait::async_trait;
use tracing::info;

fn validate_name(name: &str) -> Result<(), RestaurantError> {
    if name.trim().is_empty() {
        return Err(RestaurantError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Context = ();
    type Error = RestaurantError;

    fn assign_id(seq: u32, _params: &RestaurantCreate) -> RestaurantId {
        RestaurantId(seq)
    }

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        Ok(Self::new(id, params.name, params.address))
    }

    async fn on_update(
        &mut self,
        update: RestaurantUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &Self::Context,
    ) -> Result<RestaurantActionResult, Self::Error> {
        match action {
            RestaurantAction::AddMenuItem { name, price } => {
                let item_id = self.menu.add_new(name, price)?;
                info!(restaurant_id = %self.id, %item_id, "Menu item added");
                Ok(RestaurantActionResult::AddMenuItem(item_id))
            }
            RestaurantAction::RemoveMenuItem(item_id) => {
                let removed = self.menu.remove(item_id)?;
                info!(restaurant_id = %self.id, %item_id, "Menu item removed");
                Ok(RestaurantActionResult::RemoveMenuItem(removed))
            }
            RestaurantAction::Menu => Ok(RestaurantActionResult::Menu(
                self.menu.items().cloned().collect(),
            )),
        }
    }
}
