//! # Generic Messages
//!
//! Requests a [`ResourceClient`](crate::framework::ResourceClient) sends to its
//! [`ResourceActor`](crate::framework::ResourceActor). Each carries a oneshot
//! sender for the reply.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// CRUD plus two registry operations:
///
/// - **GetOrCreate**: returns the entity already stored under the payload's key,
///   or creates it. The reply's `bool` is `true` when a new entity was created.
///   Because the actor handles one message at a time, two concurrent calls for the
///   same key can never both create.
/// - **List**: snapshot of every stored entity.
///
/// `Action` runs an entity-specific [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    GetOrCreate {
        params: T::Create,
        respond_to: Response<(T::Id, bool)>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
