use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use careerplan_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Renders as a `{ "error", "code" }` JSON body. Anything that would leak
/// internals (database failures, goals that cannot be advanced) is logged
/// and answered with a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `careerplan_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::AlreadyComplete { entity, id }) => (
                StatusCode::BAD_REQUEST,
                "GOAL_ALREADY_COMPLETE",
                format!("{entity} with id {id} is already completed"),
            ),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                internal()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
