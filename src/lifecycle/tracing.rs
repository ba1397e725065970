//! # Tracing Setup
//!
//! Log level comes from `RUST_LOG`. Lines are compact with spans inline and no
//! module path; the `entity_type` field says which actor logged it.
//!
//! ```bash
//! RUST_LOG=info cargo run    # lifecycle, checkout, dispatch
//! RUST_LOG=debug cargo run   # every request with its payload
//! RUST_LOG=food_delivery::order_actor=debug cargo run
//! ```
//!
//! A checkout at `info` reads roughly as below. Actor tasks log outside the
//! caller's spans.
//!
//! ```text
//! INFO Paying via cash amount=30.0
//! INFO Deleted entity_type="Cart" id=cart_1_1 size=0
//! INFO Checked out order_id=order_1 key=cart_1_1 total=30.0
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

/// Installs the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
