//! Cache/facade layer coordinating user-facing operations with the store.
//!
//! # Responsibility
//! - Keep an in-memory snapshot consistent with durable state.
//! - Keep callers decoupled from SQL statement details.

pub mod task_manager;
