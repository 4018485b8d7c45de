//! Type-safe error codes for API responses.
//!
//! Each code carries:
//! - a string identifier for clients (e.g., "DUPLICATE_ENTRY")
//! - an integer for logs and monitoring (e.g., 2005)
//! - a default human-readable message
//! - the HTTP status it is served with
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::DuplicateEntry;
//! assert_eq!(code.as_str(), "DUPLICATE_ENTRY");
//! assert_eq!(code.code(), 2005);
//! assert_eq!(code.status().as_u16(), 409);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Path id is not an integer
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Header token is missing or wrong
    Unauthorized,

    /// Request conflicts with an existing resource
    Conflict,

    /// Date is not in the accepted `DD/MM/YYYY` form
    InvalidDate,

    /// No handler for this method on the path
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999), one per classified server error
    /// Database rejected the credentials
    DatabaseAccessDenied,

    /// Connection has no default database
    NoDatabaseSelected,

    /// A required column received NULL
    NotNullViolation,

    /// Statement references an unknown column
    UnknownColumn,

    /// Unique key already holds this value
    DuplicateEntry,

    /// Statement could not be parsed by the server
    SqlSyntax,

    /// Table does not exist
    TableMissing,

    /// Unclassified database failure
    DatabaseUnhandled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Conflict => "CONFLICT",
            Self::InvalidDate => "INVALID_DATE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseAccessDenied => "DATABASE_ACCESS_DENIED",
            Self::NoDatabaseSelected => "NO_DATABASE_SELECTED",
            Self::NotNullViolation => "NOT_NULL_VIOLATION",
            Self::UnknownColumn => "UNKNOWN_COLUMN",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::SqlSyntax => "SQL_SYNTAX",
            Self::TableMissing => "TABLE_MISSING",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Integer code for structured logs. Ranges:
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Unauthorized => 1006,
            Self::Conflict => 1008,
            Self::ServiceUnavailable => 1011,
            Self::InvalidDate => 1012,
            Self::MethodNotAllowed => 1013,

            Self::DatabaseAccessDenied => 2001,
            Self::NoDatabaseSelected => 2002,
            Self::NotNullViolation => 2003,
            Self::UnknownColumn => 2004,
            Self::DuplicateEntry => 2005,
            Self::SqlSyntax => 2006,
            Self::TableMissing => 2007,
            Self::DatabaseUnhandled => 2099,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "invalid id",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "token not found",
            Self::Conflict => "Resource already exists",
            Self::InvalidDate => "error parsing date",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseAccessDenied => "access denied for user",
            Self::NoDatabaseSelected => "no database selected",
            Self::NotNullViolation => "column cannot be null",
            Self::UnknownColumn => "unknown column",
            Self::DuplicateEntry => "duplicate entry",
            Self::SqlSyntax => "syntax error",
            Self::TableMissing => "table does not exist",
            Self::DatabaseUnhandled => "internal error",
        }
    }

    /// HTTP status the code is served with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError
            | Self::InvalidId
            | Self::JsonExtraction
            | Self::InvalidDate
            | Self::NotNullViolation
            | Self::UnknownColumn
            | Self::SqlSyntax => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict | Self::DuplicateEntry => StatusCode::CONFLICT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError
            | Self::DatabaseAccessDenied
            | Self::NoDatabaseSelected
            | Self::TableMissing
            | Self::DatabaseUnhandled => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
