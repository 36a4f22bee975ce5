/// Data types: Task, Snapshot.
pub mod models;
/// In-memory task store: add, complete, delete, clear-completed.
pub mod store;
/// Axum-based web server and router.
pub mod web;
