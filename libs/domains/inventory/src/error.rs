use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use sea_orm::DbErr;
use thiserror::Error;

/// Every failure a repository can report.
///
/// Driver errors never leave the repository; they are classified into one of
/// these kinds, and anything unrecognised becomes [`StoreError::Internal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("internal error")]
    Internal,

    #[error("access denied for user")]
    AccessDenied,

    #[error("no database selected")]
    NoDatabaseSelected,

    #[error("column cannot be null")]
    NotNullViolation,

    #[error("unknown column")]
    UnknownColumn,

    #[error("duplicate entry")]
    DuplicateEntry,

    #[error("syntax error")]
    SyntaxError,

    #[error("table does not exist")]
    TableMissing,

    #[error("error parsing date")]
    DateParseError,

    #[error("already exists a product with that product code")]
    AlreadyExists,
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Classify a MySQL server error number.
    pub fn from_server_error_number(number: u16) -> Self {
        match number {
            1044 | 1045 => StoreError::AccessDenied,
            1046 => StoreError::NoDatabaseSelected,
            1048 => StoreError::NotNullViolation,
            1054 => StoreError::UnknownColumn,
            1062 => StoreError::DuplicateEntry,
            1064 => StoreError::SyntaxError,
            1146 => StoreError::TableMissing,
            _ => StoreError::Internal,
        }
    }

    /// Response code for this kind
    pub fn code(self) -> ErrorCode {
        match self {
            StoreError::NotFound => ErrorCode::NotFound,
            StoreError::Internal => ErrorCode::DatabaseUnhandled,
            StoreError::AccessDenied => ErrorCode::DatabaseAccessDenied,
            StoreError::NoDatabaseSelected => ErrorCode::NoDatabaseSelected,
            StoreError::NotNullViolation => ErrorCode::NotNullViolation,
            StoreError::UnknownColumn => ErrorCode::UnknownColumn,
            StoreError::DuplicateEntry => ErrorCode::DuplicateEntry,
            StoreError::SyntaxError => ErrorCode::SqlSyntax,
            StoreError::TableMissing => ErrorCode::TableMissing,
            StoreError::DateParseError => ErrorCode::InvalidDate,
            StoreError::AlreadyExists => ErrorCode::Conflict,
        }
    }

    /// Convert into a response error, naming the missing `resource` on `NotFound`.
    pub fn into_app_error(self, resource: &str) -> AppError {
        match self {
            StoreError::NotFound => AppError::NotFound(format!("{} not found", resource)),
            StoreError::AlreadyExists => AppError::Conflict(self.to_string()),
            other => AppError::Database {
                code: other.code(),
                message: other.to_string(),
            },
        }
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if matches!(err, DbErr::RecordNotFound(_)) {
            return StoreError::NotFound;
        }

        match database::mysql::server_error_number(&err) {
            Some(number) => {
                let kind = StoreError::from_server_error_number(number);
                if kind == StoreError::Internal {
                    tracing::error!(error_number = number, error = %err, "Unclassified MySQL error");
                } else {
                    tracing::warn!(error_number = number, kind = %kind, "MySQL error");
                }
                kind
            }
            None => {
                tracing::error!(error = %err, "Database error");
                StoreError::Internal
            }
        }
    }
}

/// Convert StoreError to AppError for standardized error responses
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        err.into_app_error("resource")
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
