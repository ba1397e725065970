//! Generic actor framework backing every registry in the crate.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that registry entries implement
//! - [`ResourceActor`] - Task that owns one registry and serves its requests
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`ActorClient`] - Shared `get`/`list` for the domain clients
//! - [`FrameworkError`] - Transport and lookup failures
//!
//! # Testing
//!
//! See [`mock`] for clients that answer from canned expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
