//! Durable task storage contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the store seam used by the manager layer.
//! - Isolate SQLite statement details from cache/facade orchestration.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Operations addressing a missing id succeed as no-ops.

pub mod task_store;
