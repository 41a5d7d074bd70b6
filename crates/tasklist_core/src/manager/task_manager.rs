//! Task manager: in-memory cache over the durable store.
//!
//! # Responsibility
//! - Forward every mutation to the store, then refresh the snapshot from a
//!   full re-read.
//! - Serve reads from the snapshot without touching the store.
//!
//! # Invariants
//! - The cache is a derived, disposable view; the store is the only source
//!   of truth and the cache can be rebuilt from it at any time.
//! - On any store failure the refresh is skipped, so the cache keeps its
//!   pre-call state and the caller sees the error.
//! - Tasks are addressed by store-assigned id only; the cache position of
//!   a task carries no meaning.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::{StoreResult, TaskStore};
use log::info;

/// In-memory task snapshot backed by a durable store.
///
/// At most one manager should operate against one open store handle; the
/// add-then-refresh sequence is not atomic with respect to other writers
/// on the same file, so a concurrent writer's rows show up in the cache at
/// the next refresh (last refresh wins).
pub struct TaskManager<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: TaskStore> TaskManager<S> {
    /// Creates a manager and populates the cache with a full load.
    ///
    /// Fails when the initial load fails; a manager never starts with a
    /// snapshot it could not read.
    pub fn new(store: S) -> StoreResult<Self> {
        let tasks = store.list()?;
        info!(
            "event=manager_init module=manager status=ok cached={}",
            tasks.len()
        );
        Ok(Self { store, tasks })
    }

    /// Adds a task, then refreshes the cache from the store.
    pub fn add(&mut self, description: &str) -> StoreResult<()> {
        self.store.add(description)?;
        self.refresh()
    }

    /// Returns the cached tasks, ordered by id ascending.
    ///
    /// This is the snapshot as of the last successful mutation through this
    /// manager, not a fresh store read.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Marks the task with the given store id as done, then refreshes.
    ///
    /// A missing or already-done id is a successful no-op.
    pub fn mark_done(&mut self, id: TaskId) -> StoreResult<()> {
        self.store.mark_done(id)?;
        self.refresh()
    }

    /// Deletes the task with the given store id, then refreshes.
    ///
    /// A missing id is a successful no-op.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        self.store.delete(id)?;
        self.refresh()
    }

    /// Removes every task, all-or-nothing, and empties the cache.
    ///
    /// Calling this on an already-empty store succeeds.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.store.clear()?;
        self.tasks.clear();
        Ok(())
    }

    /// Hands the store back, discarding the cache.
    pub fn into_store(self) -> S {
        self.store
    }

    fn refresh(&mut self) -> StoreResult<()> {
        self.tasks = self.store.list()?;
        Ok(())
    }
}
