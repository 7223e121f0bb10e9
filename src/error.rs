//! # Error Types
//!
//! Fatal errors for the collaborator-facing layers. Command interpretation
//! and raster decoding never fail; their recoverable problems are reported as
//! [`Diagnostic`](crate::diagnostic::Diagnostic)s instead.

use thiserror::Error;

/// Main error type for zpl-label operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Canvas (renderer) failure while drawing an element
    #[error("Render error: {0}")]
    Render(String),

    /// Symbol encoder failure (barcode / DataMatrix generation)
    #[error("Symbol error: {0}")]
    Symbol(String),

    /// I/O error wrapper, for canvases that load logos or fonts from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
