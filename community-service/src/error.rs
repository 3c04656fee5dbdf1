/// Error types for Community Service
///
/// Errors are converted to HTTP responses with an `{"error": ...}` body,
/// which is the shape API clients key off.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for community-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("{0}")]
    Database(String),

    /// Cache operation failed
    #[error("{0}")]
    Cache(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Unauthorized access
    #[error("{0}")]
    Unauthorized(String),

    /// Bad request
    #[error("{0}")]
    BadRequest(String),

    /// The (post, user, kind) reaction row already exists
    #[error("Already reacted")]
    AlreadyReacted,

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Cache(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::AlreadyReacted => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Cache(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::AlreadyReacted.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("no session".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::NotFound("post".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_duplicate_reaction_message_is_exact() {
        // Clients match on this message verbatim
        assert_eq!(AppError::AlreadyReacted.to_string(), "Already reacted");
    }
}
