//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `tasks` table.
//!
//! # Invariants
//! - `id` is store-assigned, unique and monotonic; it is never reused even
//!   after deletes.
//! - `completed_at` is zero until the task transitions to done, and is set
//!   exactly once at that transition.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// A single to-do item with identity, text and completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned primary key. Monotonic across the file lifetime.
    pub id: TaskId,
    /// Free-form task text as entered by the user.
    pub description: String,
    /// Completion flag. One-directional: there is no un-done transition.
    pub done: bool,
    /// Unix epoch seconds at creation.
    pub created_at: i64,
    /// Unix epoch seconds at completion; zero while the task is open.
    pub completed_at: i64,
}

impl Task {
    /// Returns the completion instant, or `None` while the task is open.
    pub fn completion_time(&self) -> Option<i64> {
        if self.done {
            Some(self.completed_at)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn completion_time_is_gated_on_done() {
        let mut task = Task {
            id: 1,
            description: "write report".to_string(),
            done: false,
            created_at: 1_700_000_000,
            completed_at: 0,
        };
        assert_eq!(task.completion_time(), None);

        task.done = true;
        task.completed_at = 1_700_000_120;
        assert_eq!(task.completion_time(), Some(1_700_000_120));
    }
}
