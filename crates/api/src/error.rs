use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dorama_core::error::{CoreError, FieldErrors};
use dorama_db::error::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for storage errors.
/// Implements [`IntoResponse`] so every failure maps onto exactly one HTTP
/// status with a stable `{"error": ...}` JSON envelope: a string for general
/// failures, a `{field: message}` object for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dorama_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `dorama_db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Core(CoreError::Validation(errors))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(errors.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(fields) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": fields }))
                }
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "internal error");
                    internal_body()
                }
            },

            // --- Storage errors ---
            AppError::Db(db) => match db {
                DbError::NotFound => (
                    StatusCode::NOT_FOUND,
                    json!({ "error": "the requested resource could not be found" }),
                ),
                DbError::EditConflict => {
                    (StatusCode::CONFLICT, json!({ "error": db.to_string() }))
                }
                DbError::DuplicateEmail => {
                    let mut fields = FieldErrors::new();
                    fields.add("email", db.to_string());
                    (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": fields }))
                }
                DbError::Timeout => {
                    tracing::error!("database query timed out");
                    internal_body()
                }
                DbError::Sqlx(err) => {
                    tracing::error!(error = %err, "database error");
                    internal_body()
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 response body; the underlying cause is already logged.
fn internal_body() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "the server encountered a problem and could not process your request" }),
    )
}
