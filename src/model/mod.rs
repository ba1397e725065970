//! Plain data types for the delivery domain.
//!
//! Each registry entry (customer, restaurant, cart, order, rider) implements
//! [`ActorEntity`](crate::framework::ActorEntity) in its `*_actor` module.

/// Declares a sequential `u32` identifier that displays as `<prefix>_<n>`.
macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod address;
pub mod cart;
pub mod customer;
pub mod order;
pub mod restaurant;
pub mod rider;

pub use address::*;
pub use cart::*;
pub use customer::*;
pub use order::*;
pub use restaurant::*;
pub use rider::*;
