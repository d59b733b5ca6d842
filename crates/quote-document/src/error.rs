//! Error types for document generation.

use thiserror::Error;

/// Errors raised while laying out or writing a quote document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// There is nothing to bill; the document would be an empty table.
    #[error("Quote has no line items to render")]
    EmptyQuote,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
