//! API error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use yoyaku_db::DbError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The raw error text goes to the caller; there is no error-code
            // taxonomy beyond the status.
            ApiError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {err}"),
            )
                .into_response(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Database(err)
    }
}
