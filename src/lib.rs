#![allow(clippy::new_without_default)]
#![allow(clippy::should_implement_trait)]
#![cfg_attr(test, allow(dead_code))]

//! # Proverb Tagger
//!
//! Romanian proverb extraction and heuristic part-of-speech tagging.
//!
//! ## Core Features
//!
//! - **Segmentation**: rebuilds proverbs from line-wrapped, artifact-laden PDF text
//! - **POS Tagging**: lexicon and suffix heuristics with per-category numbering
//!   (`s1`, `s2`, `art1`, ...) that restarts for every proverb
//! - **Page Numbers**: read from scan filenames (`_Page_006_`, `7-17`)
//! - **Statistics**: counts, longest/shortest proverb, average length, POS distribution
//! - **Reports**: XLSX with legend and statistics sheets, or CSV, never overwriting
//!   earlier reports
//!
//! ## Architecture
//!
//! ```text
//! PDF / text file ─[extractors]─▶ RawDocument ─[pipeline]─▶ Proverb[] + CorpusStatistics
//!                                                              │
//!                                                  [converters]▼
//!                                                     XLSX / CSV report
//! ```
//!
//! The `text` core is pure: it never fails and never shares state, so documents can
//! be processed in parallel. All fallibility lives in extraction and report writing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use proverb_tagger::config::ExtractionConfig;
//! use proverb_tagger::converters::write_report;
//! use proverb_tagger::extractors::AutoExtractor;
//! use proverb_tagger::pipeline::ProverbPipeline;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractionConfig::new().with_output_dir("output");
//! let pipeline = ProverbPipeline::with_config(&config);
//!
//! let files = vec![PathBuf::from("Enciclopedia_Page_007_ocred.pdf")];
//! let batch = pipeline.process_files(&files, &AutoExtractor::new());
//!
//! for proverb in batch.proverbs() {
//!     println!("{} {}", proverb.proverb_number, proverb.tag_summary());
//! }
//! let path = write_report(&batch.report, &config)?;
//! println!("Report: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! Tagging a single proverb needs nothing but the core:
//!
//! ```
//! use proverb_tagger::text::PosTagger;
//!
//! let tags = PosTagger::new().tag("Dreptatea e nemuritoare.");
//! let rendered: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
//! assert_eq!(rendered, vec!["s1:Dreptatea", "v1:e", "a1:nemuritoare"]);
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Segmentation and tagging core
pub mod text;

// Documents and proverb records
pub mod document;

// Aggregation and statistics
pub mod pipeline;

// Text extraction from source files
pub mod extractors;

// Report writers
pub mod converters;

// In-memory bookkeeping and the upload/process flow
pub mod service;
pub mod store;

// Re-exports
pub use config::{ExtractionConfig, ProcessingRequest, ReportFormat};
pub use document::{Proverb, RawDocument};
pub use error::{Error, Result};
pub use pipeline::{BatchResult, CorpusReport, CorpusStatistics, ProverbPipeline};
pub use text::{Category, PageNumberExtractor, PosTag, PosTagger, ProverbSegmenter};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
