//! Starting, wiring and stopping the actors.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::*;
pub use self::tracing::setup_tracing;
