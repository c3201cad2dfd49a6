//! Machine-readable error codes carried in the `code` field of error bodies.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Required input missing or invalid
    ValidationError,

    /// Request body is not valid JSON or has a field of the wrong type
    InvalidJson,

    /// Query string could not be parsed
    InvalidQuery,

    /// Path parameter could not be parsed
    InvalidPath,

    /// Referenced resource does not exist
    NotFound,

    /// Resource already exists
    Duplicate,

    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    // Server errors (2000s)
    /// Unexpected failure; details are only logged
    InternalError,

    /// A dependency (usually the database) is unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidPath => "INVALID_PATH",
            Self::NotFound => "NOT_FOUND",
            Self::Duplicate => "DUPLICATE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Numeric code, used as a structured field in logs
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::InvalidQuery => 1003,
            Self::NotFound => 1004,
            Self::Duplicate => 1005,
            Self::MethodNotAllowed => 1006,
            Self::InvalidPath => 1007,
            Self::InternalError => 2001,
            Self::ServiceUnavailable => 2002,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Invalid JSON body",
            Self::InvalidQuery => "Invalid query string",
            Self::InvalidPath => "Invalid path parameter",
            Self::NotFound => "Resource not found",
            Self::Duplicate => "Resource already exists",
            Self::MethodNotAllowed => "Method not allowed",
            Self::InternalError => "Internal server error",
            Self::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
