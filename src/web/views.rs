use askama::Template;

use crate::models::{Snapshot, Task};

/// The full task page. A pure view of a store snapshot; task titles are
/// user input and go through askama's default HTML escaper.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub tasks: Vec<Task>,
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl IndexPage {
    pub fn new(snapshot: Snapshot) -> Self {
        IndexPage {
            tasks: snapshot.tasks,
            total: snapshot.total,
            pending: snapshot.pending,
            completed: snapshot.completed,
        }
    }
}
