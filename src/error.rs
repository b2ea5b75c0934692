//! Error types for Bookshelf server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchRecord = 2,
    Duplicate = 3,
    BadValue = 4,
    InvalidQuery = 5,
    NotAvailable = 6,
    MaxBorrowsReached = 7,
    NotBorrowed = 8,
}

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Not available: {0}")]
    NotAvailable(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Not borrowed: {0}")]
    NotBorrowed(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Variant name reported in the error envelope
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFoundError",
            AppError::DuplicateKey(_) => "DuplicateKeyError",
            AppError::InvalidField(_) => "InvalidFieldError",
            AppError::InvalidQuery(_) => "InvalidQueryError",
            AppError::NotAvailable(_) => "NotAvailableError",
            AppError::CapacityExceeded(_) => "CapacityExceededError",
            AppError::NotBorrowed(_) => "NotBorrowedError",
            AppError::BadRequest(_) => "BadRequestError",
            AppError::Internal(_) => "InternalError",
        }
    }

    fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchRecord),
            AppError::DuplicateKey(_) => (StatusCode::BAD_REQUEST, ErrorCode::Duplicate),
            AppError::InvalidField(_) => (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::BadValue),
            AppError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidQuery),
            AppError::NotAvailable(_) => (StatusCode::CONFLICT, ErrorCode::NotAvailable),
            AppError::CapacityExceeded(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::MaxBorrowsReached)
            }
            AppError::NotBorrowed(_) => (StatusCode::NOT_FOUND, ErrorCode::NotBorrowed),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidField(errors.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::InvalidField(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error envelope body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    pub code: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::NotFound(msg)
            | AppError::DuplicateKey(msg)
            | AppError::InvalidField(msg)
            | AppError::InvalidQuery(msg)
            | AppError::NotAvailable(msg)
            | AppError::CapacityExceeded(msg)
            | AppError::NotBorrowed(msg)
            | AppError::BadRequest(msg) => msg.clone(),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code as u32,
                kind: self.kind().to_string(),
                message,
                status_code: status.as_u16(),
                timestamp: Utc::now(),
                details: serde_json::json!({ "code_name": format!("{:?}", code) }),
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
