//! # App Error Type
//!
//! One error type for everything the host reports back to the user.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │  CoreError ────────┤                                                    │
//! │  DocumentError ────┼──► AppError { code, message } ──► "[CODE] message" │
//! │  DraftError ───────┤                                                    │
//! │  std::io::Error ───┘                                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In interactive mode an error is printed and the session carries on; in
//! batch mode it ends the process with a non-zero status.

use quote_core::{CoreError, ValidationError};
use quote_document::DocumentError;
use serde::Serialize;

use crate::draft::DraftError;

/// Error reported by a command or by startup.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "description is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input rejected (blank description, bad hours, unknown field)
    ValidationError,

    /// Row or id does not exist
    NotFound,

    /// Layout or PDF output failed
    DocumentError,

    /// Environment or command-line configuration is unusable
    ConfigError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// The serialized form, e.g. `NOT_FOUND`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DocumentError => "DOCUMENT_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidPricing { reason } => {
                AppError::config(format!("Invalid pricing: {reason}"))
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::EmptyQuote => AppError::new(
                ErrorCode::DocumentError,
                "Add at least one activity before exporting",
            ),
            DocumentError::Io(e) => {
                tracing::error!("Writing the document failed: {}", e);
                AppError::new(ErrorCode::DocumentError, format!("Could not write the PDF: {e}"))
            }
        }
    }
}

impl From<DraftError> for AppError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::Item { .. } | DraftError::Parse(_) => AppError::validation(err.to_string()),
            DraftError::Read { .. } => AppError::config(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {}", err);
        AppError::internal(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}
