use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Application error type for web handlers.
///
/// The task list itself never fails; blank titles and unknown ids are
/// silent no-ops at the store level. The only errors a handler can surface
/// are infrastructure-level: a poisoned store lock or a template that
/// fails to render.
pub enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        error!("request failed: {message}");
        (status, message).into_response()
    }
}
