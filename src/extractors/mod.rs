//! Text extraction from source files.
//!
//! The segmentation core only ever sees a string. Everything that can fail while
//! producing that string (opening files, decoding PDFs) lives behind
//! [`TextExtractor`], so failures are attributed to the extractor that raised them.

pub mod pdf;

pub use pdf::PdfTextExtractor;

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Produces raw text for a source file.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of `path`, pages separated by blank lines.
    fn extract_text(&self, path: &Path) -> Result<String>;

    /// Short name used in log messages.
    fn name(&self) -> &'static str;
}

/// Reads UTF-8 text files as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Chooses the PDF or plain-text extractor from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoExtractor {
    pdf: PdfTextExtractor,
    text: PlainTextExtractor,
}

impl AutoExtractor {
    /// Create a dispatching extractor.
    pub fn new() -> Self {
        Self::default()
    }

    fn pick(&self, path: &Path) -> &dyn TextExtractor {
        if is_pdf(path) {
            &self.pdf
        } else {
            &self.text
        }
    }
}

impl TextExtractor for AutoExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let extractor = self.pick(path);
        log::debug!("Extracting {} with the {} extractor", path.display(), extractor.name());
        extractor.extract_text(path)
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}

/// Whether `path` has a `.pdf` extension, in any case.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Every PDF below `dir`, recursively, in sorted order.
///
/// Subdirectories that cannot be read are logged and skipped; only an unreadable
/// `dir` itself is an error.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidRequest(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut pdfs = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    let mut is_root = true;

    while let Some(current) = pending.pop() {
        let entries = match fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(e) if is_root => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable directory {}: {}", current.display(), e);
                continue;
            },
        };
        is_root = false;

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_pdf(&path) {
                pdfs.push(path);
            }
        }
    }

    pdfs.sort();
    log::info!("Found {} PDF files under {}", pdfs.len(), dir.display());
    Ok(pdfs)
}
