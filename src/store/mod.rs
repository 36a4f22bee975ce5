use tracing::debug;

use crate::models::{Snapshot, Task};

/// Ordered in-memory task collection plus the id counter.
///
/// Tasks keep their insertion order through every operation; `next_id`
/// starts at 1, advances exactly once per successful add, and is never
/// reset while the process lives. None of the operations can fail: blank
/// titles and unknown ids degrade to no-ops, logged at debug level.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new pending task with the next id. The title is trimmed
    /// first; a blank result is silently ignored and the counter does not
    /// move.
    pub fn add(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            debug!("ignoring add with blank title");
            return;
        }
        self.tasks.push(Task {
            id: self.next_id,
            title: title.to_string(),
            completed: false,
        });
        self.next_id += 1;
    }

    /// Mark the task with the given id completed. Idempotent; unknown ids
    /// are ignored.
    pub fn complete(&mut self, id: u64) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.completed = true,
            None => debug!(id, "complete: no such task"),
        }
    }

    /// Remove the task with the given id, keeping the relative order of the
    /// rest. Unknown ids are ignored.
    pub fn delete(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(id, "delete: no such task");
        }
    }

    /// Drop every completed task, keeping the pending ones in order.
    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.completed);
    }

    /// Current tasks in insertion order plus the derived counters.
    pub fn snapshot(&self) -> Snapshot {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Snapshot {
            tasks: self.tasks.clone(),
            total,
            pending: total - completed,
            completed,
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
