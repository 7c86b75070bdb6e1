/*
[INPUT]:  Error sources (HTTP transport, API responses, validation, serde)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error record returned by the reseller API on non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub timestamp: String,
    pub status: i32,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// Main error type for the reseller adapter
#[derive(Error, Debug)]
pub enum ResellerError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {}): {}", .0.status, .0.message)]
    Api(ApiErrorBody),

    /// Input rejected locally, before any request was issued
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// A successful response carried a body we could not decode
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ResellerError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ResellerError::Validation {
            message: message.into(),
        }
    }

    /// Map a non-success response body into the structured API error.
    ///
    /// Falls back to carrying the raw body text as the message when the body
    /// is not the documented `{timestamp, status, error, message, path}`
    /// shape.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => ResellerError::Api(parsed),
            Err(_) => ResellerError::Api(ApiErrorBody {
                timestamp: String::new(),
                status: i32::from(status.as_u16()),
                error: status.canonical_reason().unwrap_or_default().to_string(),
                message: String::from_utf8_lossy(body).into_owned(),
                path: String::new(),
            }),
        }
    }

    /// Check if the error was raised locally, without a request being made
    pub fn is_validation(&self) -> bool {
        matches!(self, ResellerError::Validation { .. })
    }

    /// Check if the error is a structured API error response
    pub fn is_api_error(&self) -> bool {
        matches!(self, ResellerError::Api(_))
    }

    /// HTTP status reported by the API, for API errors
    pub fn status(&self) -> Option<i32> {
        match self {
            ResellerError::Api(body) => Some(body.status),
            _ => None,
        }
    }
}

/// Result type alias for reseller adapter operations
pub type Result<T> = std::result::Result<T, ResellerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_structured() {
        let body = r#"{
            "timestamp": "2024-05-01T10:00:00Z",
            "status": 500,
            "error": "Internal",
            "message": "boom",
            "path": "/x"
        }"#;
        let err = ResellerError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body.as_bytes());
        match err {
            ResellerError::Api(parsed) => {
                assert_eq!(parsed.status, 500);
                assert_eq!(parsed.error, "Internal");
                assert_eq!(parsed.message, "boom");
                assert_eq!(parsed.path, "/x");
            }
            other => panic!("expected Api error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_from_response_falls_back_to_raw_body() {
        let err = ResellerError::from_response(StatusCode::BAD_GATEWAY, b"upstream unreachable");
        match err {
            ResellerError::Api(parsed) => {
                assert_eq!(parsed.status, 502);
                assert_eq!(parsed.message, "upstream unreachable");
                assert!(parsed.timestamp.is_empty());
                assert!(parsed.path.is_empty());
            }
            other => panic!("expected Api error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_predicates() {
        let validation = ResellerError::validation("index cannot be less than 0");
        assert!(validation.is_validation());
        assert!(!validation.is_api_error());
        assert_eq!(validation.status(), None);

        let api = ResellerError::from_response(StatusCode::FORBIDDEN, b"{}");
        assert!(api.is_api_error());
        assert_eq!(api.status(), Some(403));
    }
}
