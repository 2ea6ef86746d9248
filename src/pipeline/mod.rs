//! Proverb extraction pipeline.
//!
//! Composes the pure text core over one or many documents:
//!
//! ```text
//! source file
//!     ↓
//! [TextExtractor] (PDF/text → raw text)        fallible, per document
//!     ↓
//! RawDocument
//!     ↓
//! [ProverbSegmenter] → [PosTagger]             pure, per document
//!     ↓
//! Proverb[] (filename, page, number, tags)
//!     ↓
//! [StatisticsAccumulator] (fold + merge)       over the whole batch
//!     ↓
//! CorpusReport
//! ```
//!
//! Documents are independent, so batches are processed in parallel with rayon.
//! Output order always follows input order.

pub mod stats;

pub use stats::{CorpusStatistics, ProverbLength, StatisticsAccumulator};

use crate::config::ExtractionConfig;
use crate::document::{DocumentId, Proverb, RawDocument};
use crate::extractors::TextExtractor;
use crate::text::{PageNumberExtractor, PosTagger, ProverbSegmenter};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of characters of each proverb shown in debug logs.
const LOG_PREVIEW_CHARS: usize = 50;

/// Tagged proverbs of a corpus together with their statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Proverbs in document order, then emission order
    pub proverbs: Vec<Proverb>,
    /// Statistics over `proverbs`
    pub statistics: CorpusStatistics,
}

impl CorpusReport {
    /// Build a report, computing statistics from `proverbs`.
    pub fn new(proverbs: Vec<Proverb>) -> Self {
        let statistics = CorpusStatistics::from_proverbs(&proverbs);
        Self {
            proverbs,
            statistics,
        }
    }
}

/// A source file that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path of the file
    pub path: PathBuf,
    /// Extraction error message
    pub reason: String,
}

/// Result of processing a batch of files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Proverbs and statistics of every file that could be extracted
    #[serde(flatten)]
    pub report: CorpusReport,
    /// Files that were skipped
    pub skipped: Vec<SkippedFile>,
}

impl BatchResult {
    /// Extracted proverbs.
    pub fn proverbs(&self) -> &[Proverb] {
        &self.report.proverbs
    }

    /// Statistics over the extracted proverbs.
    pub fn statistics(&self) -> &CorpusStatistics {
        &self.report.statistics
    }
}

/// Runs segmentation and tagging over documents.
#[derive(Debug, Clone, Default)]
pub struct ProverbPipeline {
    segmenter: ProverbSegmenter,
    tagger: PosTagger,
    page_numbers: PageNumberExtractor,
}

impl ProverbPipeline {
    /// Pipeline with the default page sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline configured from an [`ExtractionConfig`].
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self::new().with_page_extractor(PageNumberExtractor::new(config.default_page.clone()))
    }

    /// Use a specific page-number extractor.
    pub fn with_page_extractor(mut self, extractor: PageNumberExtractor) -> Self {
        self.page_numbers = extractor;
        self
    }

    /// Page-number extractor used for every document.
    pub fn page_extractor(&self) -> &PageNumberExtractor {
        &self.page_numbers
    }

    /// Segment and tag one document.
    ///
    /// Every proverb carries the document's filename and its page number, read
    /// once from the filename. Proverb numbers run from 1 without gaps.
    pub fn process_document(&self, document: &RawDocument) -> Vec<Proverb> {
        let filename = document.source_filename();
        let page_number = self.page_numbers.extract(filename);

        let proverbs: Vec<Proverb> = self
            .segmenter
            .segment(document.raw_text())
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                log::debug!(
                    "{} #{}: {}",
                    filename,
                    i + 1,
                    text.chars().take(LOG_PREVIEW_CHARS).collect::<String>()
                );
                let pos_tags = self.tagger.tag(&text);
                Proverb {
                    source_filename: filename.to_string(),
                    page_number: page_number.clone(),
                    proverb_number: i + 1,
                    text,
                    pos_tags,
                }
            })
            .collect();

        log::info!(
            "Processed {} (page {}): {} proverbs",
            filename,
            page_number,
            proverbs.len()
        );
        proverbs
    }

    /// Process documents in parallel and compute statistics over all of them.
    pub fn process_batch(&self, documents: &[RawDocument]) -> CorpusReport {
        let proverbs: Vec<Proverb> = documents
            .par_iter()
            .map(|doc| self.process_document(doc))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        let statistics = proverbs
            .par_iter()
            .fold(StatisticsAccumulator::new, |mut acc, proverb| {
                acc.push(proverb);
                acc
            })
            .reduce(StatisticsAccumulator::new, StatisticsAccumulator::merge)
            .finish();

        CorpusReport {
            proverbs,
            statistics,
        }
    }

    /// Extract, segment and tag a list of files.
    ///
    /// Files that fail to extract are logged, recorded in
    /// [`BatchResult::skipped`] and left out; the rest of the batch continues.
    pub fn process_files<E>(&self, paths: &[PathBuf], extractor: &E) -> BatchResult
    where
        E: TextExtractor + ?Sized,
    {
        let extracted: Vec<(usize, &PathBuf, crate::Result<String>)> = paths
            .par_iter()
            .enumerate()
            .map(|(i, path)| (i, path, extractor.extract_text(path)))
            .collect();

        let mut documents = Vec::with_capacity(extracted.len());
        let mut skipped = Vec::new();
        for (i, path, result) in extracted {
            match result {
                Ok(text) => {
                    documents.push(RawDocument::new(i as DocumentId + 1, display_name(path), text))
                },
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                },
            }
        }

        BatchResult {
            report: self.process_batch(&documents),
            skipped,
        }
    }
}

/// File name component of `path`, or the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEGACY_PAGE_SENTINEL;
    use crate::error::Error;

    const TEXT: &str = "Dreptatea e nemuritoare.\nBarca nu ajunge la mal\npe căi ocolite.\n";

    #[test]
    fn test_process_document_attaches_metadata() {
        let doc = RawDocument::new(1, "colectie_Page_006_ocred.pdf", TEXT);
        let proverbs = ProverbPipeline::new().process_document(&doc);

        assert_eq!(proverbs.len(), 2);
        assert_eq!(proverbs[0].proverb_number, 1);
        assert_eq!(proverbs[1].proverb_number, 2);
        assert!(proverbs.iter().all(|p| p.page_number == "006"));
        assert!(proverbs
            .iter()
            .all(|p| p.source_filename == "colectie_Page_006_ocred.pdf"));
        assert_eq!(proverbs[1].text, "Barca nu ajunge la mal pe căi ocolite.");
        assert_eq!(proverbs[1].pos_tags[0].tag, "s1");
    }

    #[test]
    fn test_page_sentinel_from_config() {
        let config = ExtractionConfig::new().with_default_page(LEGACY_PAGE_SENTINEL);
        let pipeline = ProverbPipeline::with_config(&config);
        let proverbs = pipeline.process_document(&RawDocument::new(1, "plain.pdf", TEXT));
        assert!(proverbs.iter().all(|p| p.page_number == "7-17"));

        let proverbs = ProverbPipeline::new().process_document(&RawDocument::new(1, "plain.pdf", TEXT));
        assert!(proverbs.iter().all(|p| p.page_number == "N/A"));
    }

    #[test]
    fn test_empty_document() {
        let proverbs = ProverbPipeline::new().process_document(&RawDocument::new(1, "a.pdf", ""));
        assert!(proverbs.is_empty());
    }

    #[test]
    fn test_process_batch_keeps_document_order() {
        let docs = vec![
            RawDocument::new(1, "a_7-17.pdf", TEXT),
            RawDocument::new(2, "b.pdf", "Omul este stăpânul faptelor sale."),
        ];
        let report = ProverbPipeline::new().process_batch(&docs);

        let files: Vec<&str> = report
            .proverbs
            .iter()
            .map(|p| p.source_filename.as_str())
            .collect();
        assert_eq!(files, vec!["a_7-17.pdf", "a_7-17.pdf", "b.pdf"]);
        assert_eq!(report.proverbs[2].proverb_number, 1);
        assert_eq!(report.statistics.total_files, 2);
        assert_eq!(report.statistics.total_proverbs, 3);
        assert_eq!(report.statistics, CorpusStatistics::from_proverbs(&report.proverbs));
    }

    struct FailingOn(&'static str);

    impl TextExtractor for FailingOn {
        fn extract_text(&self, path: &Path) -> crate::Result<String> {
            if path.ends_with(self.0) {
                Err(Error::Pdf {
                    path: path.display().to_string(),
                    reason: "corrupt".to_string(),
                })
            } else {
                Ok(TEXT.to_string())
            }
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_process_files_skips_failures() {
        let paths = vec![
            PathBuf::from("in/a.pdf"),
            PathBuf::from("in/bad.pdf"),
            PathBuf::from("in/c.pdf"),
        ];
        let result = ProverbPipeline::new().process_files(&paths, &FailingOn("bad.pdf"));

        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].path, PathBuf::from("in/bad.pdf"));
        assert!(result.skipped[0].reason.contains("corrupt"));
        assert_eq!(result.proverbs().len(), 4);
        assert_eq!(result.statistics().total_files, 2);
        assert_eq!(result.proverbs()[0].source_filename, "a.pdf");
        assert_eq!(result.proverbs()[3].source_filename, "c.pdf");
    }

    #[test]
    fn test_batch_result_serializes_flat() {
        let result = ProverbPipeline::new().process_files(&[], &FailingOn("none"));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["proverbs"].as_array().unwrap().is_empty());
        assert_eq!(json["statistics"]["totalProverbs"], 0);
        assert!(json["skipped"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("dir/sub/x.pdf")), "x.pdf");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
