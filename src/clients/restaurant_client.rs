//! # Restaurant Client
//!
//! Catalog operations: restaurants and their menus.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    Address, FoodItem, FoodItemId, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate,
};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    fn map_error_for(id: RestaurantId, e: FrameworkError) -> RestaurantError {
        match e {
            FrameworkError::NotFound(_) => RestaurantError::NotFound(id),
            other => Self::map_error(other),
        }
    }

    async fn action(
        &self,
        id: RestaurantId,
        action: RestaurantAction,
    ) -> Result<RestaurantActionResult, RestaurantError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<RestaurantError>()
            .unwrap_or_else(|e| RestaurantError::ActorCommunicationError(e.to_string()))
    }
}

impl RestaurantClient {
    #[instrument(skip(self, name, address))]
    pub async fn create_restaurant(
        &self,
        name: impl Into<String>,
        address: Address,
    ) -> Result<RestaurantId, RestaurantError> {
        let params = RestaurantCreate {
            name: name.into(),
            address,
        };
        debug!(name = %params.name, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Renames and/or relocates a restaurant. The menu is untouched.
    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }

    #[instrument(skip(self, name))]
    pub async fn rename_restaurant(
        &self,
        id: RestaurantId,
        name: impl Into<String>,
    ) -> Result<Restaurant, RestaurantError> {
        self.update_restaurant(
            id,
            RestaurantUpdate {
                name: Some(name.into()),
                ..Default::default()
            },
        )
        .await
    }

    /// Every restaurant on the platform, ordered by id.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut restaurants = self.list().await?;
        restaurants.sort_by_key(|restaurant| restaurant.id);
        Ok(restaurants)
    }

    #[instrument(skip(self, name))]
    pub async fn add_menu_item(
        &self,
        id: RestaurantId,
        name: impl Into<String>,
        price: f64,
    ) -> Result<FoodItemId, RestaurantError> {
        let name = name.into();
        debug!(%name, price, "Sending request");
        match self
            .action(id, RestaurantAction::AddMenuItem { name, price })
            .await?
        {
            RestaurantActionResult::AddMenuItem(item_id) => Ok(item_id),
            other => Err(RestaurantError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_menu_item(
        &self,
        id: RestaurantId,
        item_id: FoodItemId,
    ) -> Result<FoodItem, RestaurantError> {
        debug!("Sending request");
        match self
            .action(id, RestaurantAction::RemoveMenuItem(item_id))
            .await?
        {
            RestaurantActionResult::RemoveMenuItem(item) => Ok(item),
            other => Err(RestaurantError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }

    /// The menu ordered by item id.
    #[instrument(skip(self))]
    pub async fn menu(&self, id: RestaurantId) -> Result<Vec<FoodItem>, RestaurantError> {
        debug!("Sending request");
        match self.action(id, RestaurantAction::Menu).await? {
            RestaurantActionResult::Menu(items) => Ok(items),
            other => Err(RestaurantError::ActorCommunicationError(format!(
                "unexpected result: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn add_menu_item_sends_name_and_price() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let restaurant_client = RestaurantClient::new(client);

        let add_task = tokio::spawn(async move {
            restaurant_client
                .add_menu_item(RestaurantId(1), "Idli", 6.5)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, RestaurantId(1));
        match action {
            RestaurantAction::AddMenuItem { name, price } => {
                assert_eq!(name, "Idli");
                assert_eq!(price, 6.5);
            }
            other => panic!("Expected AddMenuItem, got {other:?}"),
        }
        responder
            .send(Ok(RestaurantActionResult::AddMenuItem(FoodItemId(3))))
            .unwrap();

        assert_eq!(add_task.await.unwrap().unwrap(), FoodItemId(3));
    }

    #[tokio::test]
    async fn menu_errors_come_back_typed() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let restaurant_client = RestaurantClient::new(client);

        let remove_task = tokio::spawn(async move {
            restaurant_client
                .remove_menu_item(RestaurantId(1), FoodItemId(9))
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                RestaurantError::ItemNotFound(FoodItemId(9)),
            ))))
            .unwrap();

        let err = remove_task.await.unwrap().unwrap_err();
        assert_eq!(err, RestaurantError::ItemNotFound(FoodItemId(9)));
    }

    #[tokio::test]
    async fn mismatched_result_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let restaurant_client = RestaurantClient::new(client);

        let menu_task = tokio::spawn(async move { restaurant_client.menu(RestaurantId(2)).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Ok(RestaurantActionResult::AddMenuItem(FoodItemId(1))))
            .unwrap();

        let err = menu_task.await.unwrap().unwrap_err();
        assert!(matches!(err, RestaurantError::ActorCommunicationError(_)));
    }
}
