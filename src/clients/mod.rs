//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod cart_client;
pub mod customer_client;
pub mod order_client;
pub mod restaurant_client;
pub mod rider_client;

pub use cart_client::*;
pub use customer_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use rider_client::*;
