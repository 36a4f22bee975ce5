use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Ids are positive, unique for the lifetime of the process, and never
/// reused after a delete. Titles are stored trimmed and are guaranteed
/// non-empty by the store's add operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Human-readable status label shown in the task badge.
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Done" } else { "In progress" }
    }
}

/// Read-only view of the store: the tasks in insertion order plus the
/// derived counters. `total` is always `pending + completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}
