//! CSV report writer.
//!
//! Only the proverb listing is exported; legend and statistics sheets have no
//! place in a single-table format.

use super::sheets::{self, PROVERB_HEADER};
use super::ReportWriter;
use crate::error::{Error, Result};
use crate::pipeline::CorpusReport;
use std::io::Write;
use std::path::Path;

/// Writes the proverb listing as comma-separated values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReportWriter;

impl CsvReportWriter {
    /// Create a CSV writer.
    pub fn new() -> Self {
        Self
    }

    /// Write the proverb listing of `report` into `out`.
    pub fn write_to<W: Write>(&self, report: &CorpusReport, out: W) -> Result<W> {
        let mut writer = ::csv::WriterBuilder::new().from_writer(out);
        writer.write_record(PROVERB_HEADER)?;
        for proverb in &report.proverbs {
            let row = sheets::proverb_row(proverb);
            writer.write_record(row.iter().map(|cell| cell.to_plain()))?;
        }
        writer
            .into_inner()
            .map_err(|e| Error::Report(format!("csv: {}", e)))
    }
}

impl ReportWriter for CsvReportWriter {
    fn write(&self, report: &CorpusReport, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(report, file)?;
        log::info!(
            "Wrote {} proverbs to {}",
            report.proverbs.len(),
            path.display()
        );
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}
