//! Property tests for Craftree.
//!
//! Properties use randomized input generation to protect the batch
//! arithmetic, aggregation, and list navigation invariants.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/batches.rs"]
mod batches;

#[path = "properties/aggregate.rs"]
mod aggregate;

#[path = "properties/list_scroll.rs"]
mod list_scroll;

#[path = "properties/chooser.rs"]
mod chooser;
