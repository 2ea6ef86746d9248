//! Source documents and the proverb records derived from them.

use crate::text::PosTag;
use serde::{Deserialize, Serialize};

/// Opaque document identifier.
pub type DocumentId = u32;

/// Text extracted from one source file.
///
/// Immutable once created; every proverb derived from it shares its filename
/// and page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    id: DocumentId,
    source_filename: String,
    raw_text: String,
}

impl RawDocument {
    /// Create a document from extracted text.
    pub fn new(id: DocumentId, source_filename: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id,
            source_filename: source_filename.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Document identifier.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Name of the file the text came from.
    pub fn source_filename(&self) -> &str {
        &self.source_filename
    }

    /// Extracted text, possibly spanning several pages.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// One segmented and tagged proverb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proverb {
    /// Name of the source file
    pub source_filename: String,
    /// Page number or range, or the configured sentinel
    pub page_number: String,
    /// 1-based position within the source document
    pub proverb_number: usize,
    /// Boundary-cleaned text, 10 to 500 characters
    pub text: String,
    /// Tags in token order
    pub pos_tags: Vec<PosTag>,
}

impl Proverb {
    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Tags rendered as `tag:word` pairs joined by `", "`.
    pub fn tag_summary(&self) -> String {
        self.pos_tags
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_accessors() {
        let doc = RawDocument::new(3, "doc_Page_006_ocred.pdf", "Dreptatea e nemuritoare.");
        assert_eq!(doc.id(), 3);
        assert_eq!(doc.source_filename(), "doc_Page_006_ocred.pdf");
        assert_eq!(doc.raw_text(), "Dreptatea e nemuritoare.");
    }

    #[test]
    fn test_tag_summary() {
        let proverb = Proverb {
            source_filename: "a.pdf".to_string(),
            page_number: "7-17".to_string(),
            proverb_number: 1,
            text: "Dreptatea e nemuritoare.".to_string(),
            pos_tags: vec![
                PosTag {
                    word: "Dreptatea".to_string(),
                    tag: "s1".to_string(),
                    index: 0,
                },
                PosTag {
                    word: "e".to_string(),
                    tag: "v1".to_string(),
                    index: 1,
                },
            ],
        };
        assert_eq!(proverb.tag_summary(), "s1:Dreptatea, v1:e");
        assert_eq!(proverb.char_len(), 24);
    }

    #[test]
    fn test_proverb_serializes_camel_case() {
        let proverb = Proverb {
            source_filename: "a.pdf".to_string(),
            page_number: "N/A".to_string(),
            proverb_number: 2,
            text: "Barca nu ajunge la mal.".to_string(),
            pos_tags: Vec::new(),
        };
        let json = serde_json::to_value(&proverb).unwrap();
        assert_eq!(json["pageNumber"], "N/A");
        assert_eq!(json["proverbNumber"], 2);
        assert!(json["posTags"].as_array().unwrap().is_empty());
    }
}
