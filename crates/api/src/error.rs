use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use arbor_core::error::CoreError;
use arbor_db::DbError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{status, message}` error
/// envelope. Status codes follow the service's historical mapping: 400
/// for create-tree input validation, 401 for every other client or
/// database failure. Database and codec errors propagate their raw
/// display text as the envelope's `message`, unclassified.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Create-tree body missing one of its required fields.
    #[error("missing input(s)")]
    MissingInput,

    /// Some other required body field was absent.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// A domain-level error from `arbor_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error (SQL or serialized-column decode).
    #[error(transparent)]
    Db(#[from] DbError),

    /// A database error from sqlx.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingInput => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_)
            | ApiError::Core(_)
            | ApiError::Db(_)
            | ApiError::Database(_) => StatusCode::UNAUTHORIZED,
        };

        match &self {
            ApiError::Db(err) => tracing::error!(error = %err, "Repository error"),
            ApiError::Database(err) => tracing::error!(error = %err, "Database error"),
            _ => {}
        }

        let body = json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
