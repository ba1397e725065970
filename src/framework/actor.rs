//! # Generic Actor Server
//!
//! [`ResourceActor`] owns one registry (a `HashMap` of entities) and the receiving
//! end of its channel. It processes requests one at a time on its own Tokio task,
//! so the store needs no lock and get-or-create is atomic.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(capacity)` returns the actor and a client.
/// 2. **Wire**: pass the entity's `Context` (usually other clients) to `run`.
/// 3. **Run**: spawn `run` on a Tokio task.
///
/// ```rust
/// use food_delivery::framework::ResourceActor;
/// use food_delivery::model::Customer;
/// use food_delivery::model::CustomerCreate;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Customer>::new(8);
///     tokio::spawn(actor.run(()));
///
///     let id = client
///         .create(CustomerCreate { name: "Asha".into() })
///         .await
///         .unwrap();
///     let customer = client.get(id).await.unwrap().unwrap();
///     assert_eq!(customer.name, "Asha");
/// }
/// ```
///
/// # Operations
///
/// * **Create** – key from [`ActorEntity::assign_id`]; fails with
///   [`FrameworkError::AlreadyExists`] if the key is taken, otherwise builds the
///   entity, runs `on_create`, stores it.
/// * **GetOrCreate** – same key derivation; returns the stored entity's key if
///   present, otherwise creates as above.
/// * **Get** / **List** – clones out of the store.
/// * **Update** – `on_update` on the stored entity, returns the new state.
/// * **Delete** – `on_delete`, then removal.
/// * **Action** – `handle_action` on the stored entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_seq: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_seq: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn take_seq(&mut self) -> Result<u32, FrameworkError> {
        let seq = self.next_seq.ok_or(FrameworkError::SequenceExhausted)?;
        self.next_seq = seq.checked_add(1);
        Ok(seq)
    }

    async fn insert_new(
        &mut self,
        entity_type: &str,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, %id, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let seq = match self.take_seq() {
                        Ok(seq) => seq,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };
                    let id = T::assign_id(seq, &params);
                    let result = if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        Err(FrameworkError::AlreadyExists(id.to_string()))
                    } else {
                        self.insert_new(entity_type, id, params, &context).await
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::GetOrCreate { params, respond_to } => {
                    debug!(entity_type, ?params, "GetOrCreate");
                    let seq = match self.take_seq() {
                        Ok(seq) => seq,
                        Err(e) => {
                            warn!(entity_type, error = %e, "GetOrCreate rejected");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };
                    let id = T::assign_id(seq, &params);
                    let result = if self.store.contains_key(&id) {
                        debug!(entity_type, %id, "Reusing existing entry");
                        Ok((id, false))
                    } else {
                        self.insert_new(entity_type, id, params, &context)
                            .await
                            .map(|id| (id, true))
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = match item.on_update(update, &context).await {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            Ok(item.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, CustomerCreate, CustomerId};

    fn asha() -> CustomerCreate {
        CustomerCreate {
            name: "Asha".into(),
        }
    }

    #[tokio::test]
    async fn create_after_the_last_sequence_number_is_rejected() {
        let (mut actor, client) = ResourceActor::<Customer>::new(8);
        actor.next_seq = Some(u32::MAX);
        let handle = tokio::spawn(actor.run(()));

        assert_eq!(client.create(asha()).await.unwrap(), CustomerId(u32::MAX));
        assert!(matches!(
            client.create(asha()).await,
            Err(FrameworkError::SequenceExhausted)
        ));
        assert_eq!(client.list().await.unwrap().len(), 1);

        drop(client);
        handle.await.unwrap();
    }
}
