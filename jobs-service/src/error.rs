/// Error types for Jobs Service
///
/// Errors are converted to HTTP responses with an `{"error": ...}` body.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for jobs-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("{0}")]
    Database(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Unauthorized access
    #[error("{0}")]
    Unauthorized(String),

    /// Bad request
    #[error("{0}")]
    BadRequest(String),

    /// A certificate with the same digest already exists
    #[error("Certificate already registered")]
    DuplicateCertificate,

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::DuplicateCertificate => StatusCode::BAD_REQUEST,
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
            AppError::DuplicateCertificate.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("job".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
