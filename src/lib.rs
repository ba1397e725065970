//! # Food Delivery
//!
//! The ordering side of a food delivery platform, built from resource-oriented
//! actors on Tokio: a catalog of restaurants and menus, customers, a cart per
//! customer and restaurant, orders that check out and pay for a cart, and rider
//! dispatch.
//!
//! ## Layers
//!
//! ### [`framework`]
//! The generic `ResourceActor<T>`. One Tokio task per entity type owns the
//! entities and serves create, get-or-create, get, list, update, delete and
//! custom actions over a channel, one request at a time.
//!
//! ### [`model`]
//! Plain data: [`Customer`](model::Customer), [`Restaurant`](model::Restaurant)
//! and its [`Menu`](model::Menu), [`Cart`](model::Cart), [`Order`](model::Order)
//! with its [`OrderStatus`](model::OrderStatus), [`DeliveryRider`](model::DeliveryRider).
//!
//! ### The actors
//! [`customer_actor`], [`restaurant_actor`], [`cart_actor`], [`order_actor`] and
//! [`rider_actor`] implement [`ActorEntity`](framework::ActorEntity) for the model
//! types. Dependencies between them are injected at `run()`.
//!
//! ### [`clients`]
//! Typed wrappers over `ResourceClient` with one error enum per actor.
//!
//! ### Policies
//! [`pricing`] turns a cart into a bill, [`payment`] settles it and [`dispatch`]
//! finds a rider. Each sits behind a trait so deployments can swap it.
//!
//! ### [`lifecycle`] and [`config`]
//! [`DeliverySystem`](lifecycle::DeliverySystem) starts and wires the actors from
//! a [`SystemConfig`](config::SystemConfig) and shuts them down.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod dispatch;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment;
pub mod pricing;
pub mod restaurant_actor;
pub mod rider_actor;
