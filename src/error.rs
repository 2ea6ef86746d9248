//! Error types for proverb extraction.
//!
//! The segmentation and tagging core never fails. Every variant here belongs to a
//! collaborator at the boundary: text extraction, report writing, or the in-memory
//! bookkeeping used by the processing service.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around proverb processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Text could not be extracted from a source document
    #[error("Text extraction failed for '{path}': {reason}")]
    Pdf {
        /// Path of the document that failed
        path: String,
        /// Reason reported by the extractor
        reason: String,
    },

    /// Report could not be written
    #[error("Report error: {0}")]
    Report(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No document with this id is known to the store
    #[error("Document not found: {0}")]
    DocumentNotFound(u32),

    /// Malformed processing request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Report(format!("zip: {}", err))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Report(format!("xml: {}", err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Report(format!("csv: {}", err))
    }
}
