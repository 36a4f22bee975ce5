use askama::Template;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use std::sync::MutexGuard;

use super::AppState;
use super::errors::AppError;
use super::views::IndexPage;
use crate::store::TaskStore;

/// Form payload for POST /add. A missing title field behaves like an empty
/// one: the add is silently ignored.
#[derive(Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub title: String,
}

fn lock(state: &AppState) -> Result<MutexGuard<'_, TaskStore>, AppError> {
    state
        .store
        .lock()
        .map_err(|_| AppError::Internal("task store lock poisoned".to_string()))
}

/// GET / — render the full page from the current store snapshot.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = lock(&state)?.snapshot();
    let page = IndexPage::new(snapshot);
    let html = page
        .render()
        .map_err(|e| AppError::Internal(format!("template error: {e}")))?;
    Ok(Html(html))
}

/// POST /add — create a task from the form title, then back to the page.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddForm>,
) -> Result<Redirect, AppError> {
    lock(&state)?.add(&form.title);
    Ok(Redirect::to("/"))
}

/// GET /complete/{id} — mark a task done, then back to the page.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    lock(&state)?.complete(id);
    Ok(Redirect::to("/"))
}

/// GET /delete/{id} — remove a task, then back to the page.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    lock(&state)?.delete(id);
    Ok(Redirect::to("/"))
}

/// GET /clear-completed — drop every completed task, then back to the page.
pub async fn clear_completed(State(state): State<AppState>) -> Result<Redirect, AppError> {
    lock(&state)?.clear_completed();
    Ok(Redirect::to("/"))
}
