//! Error types for outline-pdf.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting HTML to PDF.
#[derive(Debug, Error)]
pub enum Error {
    /// The page configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to assemble the PDF document.
    #[error("PDF creation failed: {0}")]
    PdfCreate(String),

    /// Font loading or embedding failed.
    #[error("font error: {0}")]
    Font(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
