//! Error types and HTTP response conversion
//!
//! Every failure this crate can produce belongs to one of the closed set of
//! [`ErrorKind`]s. Each kind carries a fixed default message, status code and
//! error code, so the same strings are shared by every handler that reports
//! them.
//!
//! # Example
//!
//! ```rust
//! use request_helpers::error::{Error, ErrorKind};
//!
//! let error = Error::InvalidId;
//! assert_eq!(error.kind(), ErrorKind::InvalidId);
//! assert_eq!(error.to_string(), "invalid ID");
//! assert_eq!(error.kind().error_code(), "INVALID_ID");
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Remediation hints shown to clients next to a bad-request message
pub mod hints {
    /// Hint for a missing or empty username
    pub const FIX_INVALID_USERNAME: &str = "Please provide a valid username.";

    /// Hint for a malformed or zero record ID
    pub const FIX_INVALID_ID: &str = "Please provide a valid ID.";

    /// Hint for a request body that could not be decoded
    pub const FIX_INVALID_REQUEST_DATA: &str = "Please provide valid request data.";
}

/// Category of error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request (including undecodable JSON bodies)
    BadRequest,
    /// Resource not found
    NotFound,
    /// Access denied
    Forbidden,
    /// Internal server error
    Internal,
    /// Username missing or empty
    InvalidUsername,
    /// Record ID not a positive integer
    InvalidId,
    /// Record belongs to a different user
    OwnershipMismatch,
    /// Configuration could not be loaded
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::NotFound => write!(f, "not_found"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::Internal => write!(f, "internal"),
            Self::InvalidUsername => write!(f, "invalid_username"),
            Self::InvalidId => write!(f, "invalid_id"),
            Self::OwnershipMismatch => write!(f, "ownership_mismatch"),
            Self::Config => write!(f, "config"),
        }
    }
}

impl ErrorKind {
    /// Default human-readable message for this kind
    #[must_use]
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "not found",
            Self::Forbidden => "forbidden",
            Self::Internal => "internal server error",
            Self::InvalidUsername => "invalid username",
            Self::InvalidId => "invalid ID",
            Self::OwnershipMismatch => "record does not belong to user",
            Self::Config => "configuration error",
        }
    }

    /// HTTP status code for this kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest | Self::InvalidUsername | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden | Self::OwnershipMismatch => StatusCode::FORBIDDEN,
            Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error code string for this kind
    #[must_use]
    pub fn error_code(&self) -> String {
        self.to_string().to_uppercase()
    }

    /// Remediation hint for kinds that have a standard one
    #[must_use]
    pub const fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::BadRequest => Some(hints::FIX_INVALID_REQUEST_DATA),
            Self::InvalidUsername => Some(hints::FIX_INVALID_USERNAME),
            Self::InvalidId => Some(hints::FIX_INVALID_ID),
            _ => None,
        }
    }
}

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Bad request
    #[error("bad request")]
    BadRequest,

    /// Resource not found
    #[error("not found")]
    NotFound,

    /// Access denied
    #[error("forbidden")]
    Forbidden,

    /// Internal server error
    #[error("internal server error")]
    Internal,

    /// Username failed validation
    #[error("invalid username")]
    InvalidUsername,

    /// Record ID failed validation
    #[error("invalid ID")]
    InvalidId,

    /// Record is owned by someone other than the requesting user
    #[error("the record {id} does not belong to {username}")]
    OwnershipMismatch {
        /// Record identifier, already formatted for display
        id: String,
        /// User that attempted the access
        username: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl Error {
    /// The kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest => ErrorKind::BadRequest,
            Self::NotFound => ErrorKind::NotFound,
            Self::Forbidden => ErrorKind::Forbidden,
            Self::Internal => ErrorKind::Internal,
            Self::InvalidUsername => ErrorKind::InvalidUsername,
            Self::InvalidId => ErrorKind::InvalidId,
            Self::OwnershipMismatch { .. } => ErrorKind::OwnershipMismatch,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Remediation hint for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,

    /// Error code (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fix: None,
            code: None,
            status: status.as_u16(),
        }
    }

    /// Create a 400 response carrying a remediation hint
    ///
    /// ```rust
    /// use request_helpers::error::ErrorResponse;
    ///
    /// let body = ErrorResponse::bad_request("invalid ID", "Please provide a valid ID.");
    /// assert_eq!(body.status, 400);
    /// assert_eq!(body.code.as_deref(), Some("BAD_REQUEST"));
    /// ```
    pub fn bad_request(error: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fix: Some(fix.into()),
            code: Some(ErrorKind::BadRequest.error_code()),
            status: StatusCode::BAD_REQUEST.as_u16(),
        }
    }

    /// Attach an error code
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a remediation hint
    #[must_use]
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = kind.status_code();

        let message = match &self {
            // Don't leak configuration details to clients
            Error::Config(e) => {
                tracing::error!(kind = %kind, "Configuration error: {}", e);
                kind.default_message().to_string()
            }
            Error::Internal => {
                tracing::error!(kind = %kind, "Internal error");
                self.to_string()
            }
            _ => {
                tracing::debug!(kind = %kind, "Request error: {}", self);
                self.to_string()
            }
        };

        let mut body = ErrorResponse::new(status, message).with_code(kind.error_code());
        if let Some(fix) = kind.default_hint() {
            body = body.with_fix(fix);
        }

        body.into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
