//! Report writers.
//!
//! A report is the proverb list of a corpus plus its statistics. Writers turn it
//! into a file:
//! - **XLSX**: proverb listing, optional category legend, optional statistics
//! - **CSV**: proverb listing only
//!
//! # Examples
//!
//! ```no_run
//! use proverb_tagger::config::{ExtractionConfig, ReportFormat};
//! use proverb_tagger::converters::write_report;
//! use proverb_tagger::pipeline::ProverbPipeline;
//! use proverb_tagger::document::RawDocument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = RawDocument::new(1, "colectie_Page_006_ocred.pdf", "Dreptatea e nemuritoare.");
//! let report = ProverbPipeline::new().process_batch(&[doc]);
//!
//! let config = ExtractionConfig::new()
//!     .with_output_dir("output")
//!     .with_format(ReportFormat::Csv);
//! let path = write_report(&report, &config)?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod sheets;
pub mod versioning;
pub mod xlsx;

pub use self::csv::CsvReportWriter;
pub use sheets::{Cell, Sheet};
pub use versioning::versioned_path;
pub use xlsx::XlsxReportWriter;

use crate::config::{ExtractionConfig, ReportFormat};
use crate::error::Result;
use crate::pipeline::CorpusReport;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a [`CorpusReport`] to a file.
pub trait ReportWriter: Send + Sync {
    /// Write `report` to `path`, replacing any existing file.
    fn write(&self, report: &CorpusReport, path: &Path) -> Result<()>;

    /// File extension of the produced format, without the dot.
    fn extension(&self) -> &'static str;
}

/// Writer for `format`, honouring the sheet switches of `config`.
pub fn writer_for(config: &ExtractionConfig) -> Box<dyn ReportWriter> {
    match config.format {
        ReportFormat::Xlsx => Box::new(
            XlsxReportWriter::new()
                .with_code_sheet(config.include_code_sheet)
                .with_statistics_sheet(config.include_statistics_sheet),
        ),
        ReportFormat::Csv => Box::new(CsvReportWriter::new()),
    }
}

/// Write `report` into the configured output directory under a versioned name.
///
/// Creates the directory if needed and returns the path actually written.
pub fn write_report(report: &CorpusReport, config: &ExtractionConfig) -> Result<PathBuf> {
    fs::create_dir_all(&config.output_dir)?;
    let path = versioned_path(&config.output_dir, &config.report_filename());
    writer_for(config).write(report, &path)?;
    Ok(path)
}
