//! Upload, process and results flow over the in-memory store.
//!
//! ```text
//! upload(path, name)  → document stored as `uploaded`, page range read from name
//! process(id, request) → `processing` → extract → segment/tag → report → `completed`
//!                                                  (any failure)        → `error`
//! results(id)         → stored proverbs and written reports
//! ```

use crate::config::{ExtractionConfig, ProcessingRequest};
use crate::converters::write_report;
use crate::document::{DocumentId, Proverb, RawDocument};
use crate::error::{Error, Result};
use crate::extractors::{AutoExtractor, TextExtractor};
use crate::pipeline::{CorpusReport, ProverbPipeline};
use crate::store::{
    DocumentStatus, NewDocument, NewProverb, ProcessedFile, ProverbRecord, ProverbStore,
    StoredDocument,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Acknowledgement of a stored upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    /// Id assigned to the document
    pub document_id: DocumentId,
    /// Original name of the upload
    pub filename: String,
    /// Page number or range read from the name
    pub page_range: String,
}

/// Outcome of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProverbExtractionResult {
    /// Processed document
    pub document_id: DocumentId,
    /// Proverbs in emission order
    pub extracted_proverbs: Vec<Proverb>,
    /// Path of the written report
    pub output_filename: String,
    /// Number of proverbs
    pub total_proverbs: usize,
}

/// Everything stored for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResults {
    /// Stored proverbs
    pub proverbs: Vec<ProverbRecord>,
    /// Reports written for the document
    pub processed_files: Vec<ProcessedFile>,
}

/// Coordinates the store, a text extractor and report writing.
pub struct ProcessingService {
    store: ProverbStore,
    extractor: Box<dyn TextExtractor>,
    pipeline: ProverbPipeline,
    config: ExtractionConfig,
}

impl Default for ProcessingService {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl ProcessingService {
    /// Service using the extension-dispatching extractor.
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_extractor(config, Box::new(AutoExtractor::new()))
    }

    /// Service using a specific extractor.
    pub fn with_extractor(config: ExtractionConfig, extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            store: ProverbStore::new(),
            extractor,
            pipeline: ProverbPipeline::with_config(&config),
            config,
        }
    }

    /// Underlying store.
    pub fn store(&self) -> &ProverbStore {
        &self.store
    }

    /// Register a file already saved at `stored_path`.
    pub fn upload(&self, stored_path: &Path, original_name: &str) -> Result<UploadReceipt> {
        if original_name.trim().is_empty() {
            return Err(Error::InvalidRequest("upload has no file name".to_string()));
        }
        if !stored_path.is_file() {
            return Err(Error::InvalidRequest(format!(
                "no uploaded file at {}",
                stored_path.display()
            )));
        }

        let page_range = self.pipeline.page_extractor().extract(original_name);
        let document = self.store.create_document(NewDocument {
            filename: stored_path.display().to_string(),
            original_name: original_name.to_string(),
            page_range: Some(page_range.clone()),
            status: DocumentStatus::Uploaded,
        });
        log::info!("Uploaded {} as document {}", original_name, document.id);

        Ok(UploadReceipt {
            document_id: document.id,
            filename: document.original_name,
            page_range,
        })
    }

    /// Extract, tag and report on an uploaded document.
    ///
    /// The document ends up `completed`, or `error` if any step failed; the
    /// failure is returned either way.
    pub fn process(
        &self,
        document_id: DocumentId,
        request: &ProcessingRequest,
    ) -> Result<ProverbExtractionResult> {
        let document = self
            .store
            .document(document_id)
            .ok_or(Error::DocumentNotFound(document_id))?;
        validate_request(request)?;

        self.store
            .update_document_status(document_id, DocumentStatus::Processing)?;

        match self.run(&document, request) {
            Ok(result) => {
                self.store
                    .update_document_status(document_id, DocumentStatus::Completed)?;
                Ok(result)
            },
            Err(e) => {
                log::warn!("Processing document {} failed: {}", document_id, e);
                self.store
                    .update_document_status(document_id, DocumentStatus::Error)?;
                Err(e)
            },
        }
    }

    fn run(
        &self,
        document: &StoredDocument,
        request: &ProcessingRequest,
    ) -> Result<ProverbExtractionResult> {
        let text = self.extractor.extract_text(Path::new(&document.filename))?;
        let raw = RawDocument::new(document.id, document.original_name.as_str(), text);

        let proverbs = self.pipeline.process_document(&raw);

        let config = self
            .config
            .clone()
            .with_output_filename(request.output_filename.as_str())
            .with_format(request.output_format)
            .with_code_sheet(request.include_code_sheet);
        let report = CorpusReport::new(proverbs);
        let path = write_report(&report, &config)?;
        let output_filename = path.display().to_string();

        // Only a run that produced its report touches the stored proverbs.
        let records = report
            .proverbs
            .iter()
            .map(|proverb| NewProverb {
                document_id: document.id,
                page_number: proverb.page_number.clone(),
                proverb_number: proverb.proverb_number,
                text: proverb.text.clone(),
                pos_tags: proverb.pos_tags.clone(),
            })
            .collect();
        self.store.replace_proverbs(document.id, records);

        self.store.create_processed_file(
            document.id,
            document.original_name.as_str(),
            output_filename.as_str(),
        );

        let total_proverbs = report.proverbs.len();
        Ok(ProverbExtractionResult {
            document_id: document.id,
            extracted_proverbs: report.proverbs,
            output_filename,
            total_proverbs,
        })
    }

    /// Stored proverbs and reports of a document.
    pub fn results(&self, document_id: DocumentId) -> Result<DocumentResults> {
        if self.store.document(document_id).is_none() {
            return Err(Error::DocumentNotFound(document_id));
        }
        Ok(DocumentResults {
            proverbs: self.store.proverbs_by_document(document_id),
            processed_files: self.store.processed_files_by_document(document_id),
        })
    }
}

/// Reject report names that would escape the output directory.
fn validate_request(request: &ProcessingRequest) -> Result<()> {
    let name = request.output_filename.trim();
    if name.is_empty() {
        return Err(Error::InvalidRequest("output filename is empty".to_string()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::InvalidRequest(format!(
            "output filename {:?} is not a plain file name",
            request.output_filename
        )));
    }
    Ok(())
}
