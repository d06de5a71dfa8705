use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure reported by a storage backend, passed through with the store's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store rejected the write, e.g. a duplicate value in a unique column.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Connection, protocol or any other store-side failure.
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Constraint(msg) => AppError::Conflict(msg),
            RepositoryError::Backend(msg) => AppError::Database(msg),
            RepositoryError::Serialization(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Database(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        tracing::error!("Error: {}: {}", status, message);

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failures_map_to_status() {
        let conflict = AppError::from(RepositoryError::Constraint("duplicate key".to_string()));
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let backend = AppError::from(RepositoryError::Backend("connection refused".to_string()));
        assert_eq!(backend.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = AppError::NotFound("admin 9".to_string());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
