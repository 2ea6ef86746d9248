//! PDF text extraction backed by `pdf_oxide`.

use super::TextExtractor;
use crate::error::{Error, Result};
use pdf_oxide::PdfDocument;
use std::path::Path;

/// Separator placed between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Extracts the text of every page of a PDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    fn pdf_error(path: &Path, reason: impl std::fmt::Display) -> Error {
        Error::Pdf {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let mut doc = PdfDocument::open(path).map_err(|e| Self::pdf_error(path, e))?;
        let page_count = doc.page_count().map_err(|e| Self::pdf_error(path, e))?;

        let mut pages = Vec::with_capacity(page_count);
        for page in 0..page_count {
            let text = doc
                .extract_text(page)
                .map_err(|e| Self::pdf_error(path, format!("page {}: {}", page + 1, e)))?;
            pages.push(text);
        }

        log::debug!("Extracted {} pages from {}", page_count, path.display());
        Ok(pages.join(PAGE_SEPARATOR))
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_pdf_error() {
        let result = PdfTextExtractor::new().extract_text(Path::new("/nonexistent/doc.pdf"));
        match result {
            Err(Error::Pdf { path, .. }) => assert_eq!(path, "/nonexistent/doc.pdf"),
            other => panic!("expected a PDF error, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_file_is_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"%PDF-not really").unwrap();
        assert!(matches!(
            PdfTextExtractor::new().extract_text(&path),
            Err(Error::Pdf { .. })
        ));
    }
}
