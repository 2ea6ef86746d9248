//! Volatile in-memory bookkeeping for uploaded documents and their results.
//!
//! Nothing here survives the process. Records are kept in insertion order and
//! ids are handed out from 1, separately for each record kind. Ids are never
//! reused, even after a document's proverbs are replaced.

use crate::document::DocumentId;
use crate::error::{Error, Result};
use crate::text::PosTag;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Processing state of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Stored, not yet processed
    Uploaded,
    /// Extraction in progress
    Processing,
    /// Report written
    Completed,
    /// Processing failed
    Error,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// An uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    /// Document id
    pub id: DocumentId,
    /// Where the upload was stored
    pub filename: String,
    /// Name the file was uploaded under
    pub original_name: String,
    /// Page number or range read from the original name
    pub page_range: Option<String>,
    /// When the document was stored
    pub processed_at: DateTime<Utc>,
    /// Processing state
    pub status: DocumentStatus,
}

/// Fields of a document to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    /// Where the upload was stored
    pub filename: String,
    /// Name the file was uploaded under
    pub original_name: String,
    /// Page number or range
    pub page_range: Option<String>,
    /// Initial state
    pub status: DocumentStatus,
}

/// A proverb extracted from a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProverbRecord {
    /// Record id
    pub id: u32,
    /// Owning document
    pub document_id: DocumentId,
    /// Page number or range
    pub page_number: String,
    /// 1-based position within the document
    pub proverb_number: usize,
    /// Proverb text
    pub text: String,
    /// Tags in token order
    pub pos_tags: Vec<PosTag>,
}

/// Fields of a proverb to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct NewProverb {
    pub document_id: DocumentId,
    pub page_number: String,
    pub proverb_number: usize,
    pub text: String,
    pub pos_tags: Vec<PosTag>,
}

/// A report written for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    /// Record id
    pub id: u32,
    /// Name of the source upload
    pub original_name: String,
    /// Path of the written report
    pub output_filename: String,
    /// Source document
    pub document_id: DocumentId,
    /// When the report was written
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreState {
    documents: IndexMap<DocumentId, StoredDocument>,
    proverbs: IndexMap<u32, ProverbRecord>,
    processed_files: IndexMap<u32, ProcessedFile>,
    last_proverb_id: u32,
}

impl StoreState {
    fn next_id<V>(map: &IndexMap<u32, V>) -> u32 {
        map.len() as u32 + 1
    }

    // Proverb records can be removed, so their ids come from a counter.
    fn next_proverb_id(&mut self) -> u32 {
        self.last_proverb_id += 1;
        self.last_proverb_id
    }
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct ProverbStore {
    state: RwLock<StoreState>,
}

impl ProverbStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never panic mid-update, so poisoned state is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a document, stamping it with the current time.
    pub fn create_document(&self, new: NewDocument) -> StoredDocument {
        let mut state = self.write();
        let document = StoredDocument {
            id: StoreState::next_id(&state.documents),
            filename: new.filename,
            original_name: new.original_name,
            page_range: new.page_range,
            processed_at: Utc::now(),
            status: new.status,
        };
        state.documents.insert(document.id, document.clone());
        document
    }

    /// Document by id.
    pub fn document(&self, id: DocumentId) -> Option<StoredDocument> {
        self.read().documents.get(&id).cloned()
    }

    /// Set the status of a document.
    pub fn update_document_status(&self, id: DocumentId, status: DocumentStatus) -> Result<()> {
        let mut state = self.write();
        let document = state
            .documents
            .get_mut(&id)
            .ok_or(Error::DocumentNotFound(id))?;
        log::debug!("Document {}: {} -> {}", id, document.status, status);
        document.status = status;
        Ok(())
    }

    /// Store a proverb.
    pub fn create_proverb(&self, new: NewProverb) -> ProverbRecord {
        let mut state = self.write();
        let record = ProverbRecord {
            id: state.next_proverb_id(),
            document_id: new.document_id,
            page_number: new.page_number,
            proverb_number: new.proverb_number,
            text: new.text,
            pos_tags: new.pos_tags,
        };
        state.proverbs.insert(record.id, record.clone());
        record
    }

    /// Replace every proverb stored for `document_id` with `proverbs`.
    ///
    /// Returns the new records in the order given.
    pub fn replace_proverbs(
        &self,
        document_id: DocumentId,
        proverbs: Vec<NewProverb>,
    ) -> Vec<ProverbRecord> {
        let mut state = self.write();
        let before = state.proverbs.len();
        state.proverbs.retain(|_, p| p.document_id != document_id);
        let removed = before - state.proverbs.len();
        if removed > 0 {
            log::debug!("Document {}: dropped {} earlier proverbs", document_id, removed);
        }

        proverbs
            .into_iter()
            .map(|new| {
                let record = ProverbRecord {
                    id: state.next_proverb_id(),
                    document_id,
                    page_number: new.page_number,
                    proverb_number: new.proverb_number,
                    text: new.text,
                    pos_tags: new.pos_tags,
                };
                state.proverbs.insert(record.id, record.clone());
                record
            })
            .collect()
    }

    /// Proverbs of a document, in insertion order.
    pub fn proverbs_by_document(&self, document_id: DocumentId) -> Vec<ProverbRecord> {
        self.read()
            .proverbs
            .values()
            .filter(|p| p.document_id == document_id)
            .cloned()
            .collect()
    }

    /// Record a written report, stamping it with the current time.
    pub fn create_processed_file(
        &self,
        document_id: DocumentId,
        original_name: impl Into<String>,
        output_filename: impl Into<String>,
    ) -> ProcessedFile {
        let mut state = self.write();
        let file = ProcessedFile {
            id: StoreState::next_id(&state.processed_files),
            original_name: original_name.into(),
            output_filename: output_filename.into(),
            document_id,
            created_at: Utc::now(),
        };
        state.processed_files.insert(file.id, file.clone());
        file
    }

    /// Reports written for a document.
    pub fn processed_files_by_document(&self, document_id: DocumentId) -> Vec<ProcessedFile> {
        self.read()
            .processed_files
            .values()
            .filter(|f| f.document_id == document_id)
            .cloned()
            .collect()
    }

    /// Every report written so far.
    pub fn all_processed_files(&self) -> Vec<ProcessedFile> {
        self.read().processed_files.values().cloned().collect()
    }
}
