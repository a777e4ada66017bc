//! # Observability & Tracing
//!
//! Every actor logs through `tracing` with structured fields, so a request can be
//! followed across actors by its ids:
//!
//! ```text
//! INFO Actor started entity_type="Menu"
//! INFO Inserted entity_type="Sequence" id=counters/order_id size=1
//! INFO Action ok entity_type="Sequence" id=counters/order_id
//! INFO Inserted entity_type="Order" id=order_1 size=1
//! INFO Patched entity_type="Order" id=order_1
//! ```
//!
//! Payloads (patches, actions) are only logged at `debug`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and outcomes
//! RUST_LOG=debug cargo run     # plus request payloads
//! RUST_LOG=actor_framework=debug,food_market=info cargo run
//! ```

/// Installs the global `tracing` subscriber.
///
/// Filtering comes from `RUST_LOG`. Module paths are hidden because every actor event
/// already carries an `entity_type` field.
///
/// Panics if a global subscriber is already installed; call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
