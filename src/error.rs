//! Error types for the portfolio API
//!
//! Provides unified error handling using thiserror. The cache core has no
//! error type of its own: its operations are total. Failures originate in
//! the GitHub collaborator and the surrounding I/O.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the portfolio API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Outbound GitHub request failed
    #[error("GitHub API error: {0}")]
    Github(#[from] reqwest::Error),

    /// A configured repository URL could not be parsed
    #[error("Invalid GitHub repository URL: {0}")]
    InvalidRepoUrl(String),

    /// GitHub answered with an unexpected status
    #[error("GitHub API responded with {0}")]
    UpstreamStatus(u16),

    /// File access failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Github(_) | ApiError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            ApiError::InvalidRepoUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Io(_) | ApiError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the portfolio API.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (
                ApiError::UpstreamStatus(500),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::InvalidRepoUrl("not-a-url".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::UpstreamStatus(503);
        assert_eq!(error.to_string(), "GitHub API responded with 503");
    }
}
