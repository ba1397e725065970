//! # ActorEntity Trait
//!
//! The contract every registry entry (customer, restaurant, cart, order, rider)
//! implements to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types pin each entity to its own payloads: a `Cart` can only be
//! created from a `CartCreate`, a `Restaurant` only accepts `RestaurantAction`s,
//! and so on. The compiler rejects a mismatched message before it is ever sent.
//!
//! # Identity
//! Most entities get a sequential identifier from the actor. Some are keyed by
//! their creation payload instead (a cart is identified by the customer and the
//! restaurant it belongs to). [`ActorEntity::assign_id`] covers both: it receives
//! the actor's next sequence number *and* the payload, and returns the key.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any registry entry must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` associated type
/// is injected into every hook when the actor starts (see
/// [`ResourceActor::run`](crate::framework::ResourceActor::run)), which lets actors
/// depend on each other's clients without ordering problems at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Key under which the entity is stored.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload used to create a new entity.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing entity.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result of an [`ActorEntity::Action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` for none.
    type Context: Send + Sync;

    /// One error enum per entity.
    ///
    /// The framework boxes it on the way back; typed clients recover it with
    /// [`FrameworkError::downcast_entity`](crate::framework::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the key for a new entity.
    ///
    /// `seq` starts at 1 and advances on every create or get-or-create request
    /// the actor receives. Payload-keyed entities ignore it.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Builds the entity from its key and payload. Runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Returning an error keeps it.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handles an entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
