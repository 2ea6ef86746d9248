//! Configuration for proverb extraction and report output.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Page sentinel used when a filename carries no page number.
pub const DEFAULT_PAGE_SENTINEL: &str = "N/A";

/// Page sentinel used by the single-document upload flow.
pub const LEGACY_PAGE_SENTINEL: &str = "7-17";

/// Default base name for generated reports.
pub const DEFAULT_OUTPUT_FILENAME: &str = "proverbe_extrase";

/// Output format for a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// OOXML workbook with up to three sheets
    #[default]
    Xlsx,
    /// Comma-separated proverb rows only
    Csv,
}

impl ReportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ReportFormat::Xlsx),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(crate::error::Error::InvalidRequest(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Proverb extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Page number used when none can be read from the filename.
    pub default_page: String,

    /// Directory reports are written into.
    pub output_dir: PathBuf,

    /// Report base name, without extension.
    pub output_filename: String,

    /// Report format.
    pub format: ReportFormat,

    /// Add the category legend sheet (XLSX only).
    pub include_code_sheet: bool,

    /// Add the corpus statistics sheet (XLSX only).
    pub include_statistics_sheet: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            default_page: DEFAULT_PAGE_SENTINEL.to_string(),
            output_dir: PathBuf::from("."),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            format: ReportFormat::Xlsx,
            include_code_sheet: true,
            include_statistics_sheet: true,
        }
    }

    /// Set the page sentinel.
    pub fn with_default_page(mut self, page: impl Into<String>) -> Self {
        self.default_page = page.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the report base name.
    pub fn with_output_filename(mut self, name: impl Into<String>) -> Self {
        self.output_filename = name.into();
        self
    }

    /// Set the report format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable the legend sheet.
    pub fn with_code_sheet(mut self, enable: bool) -> Self {
        self.include_code_sheet = enable;
        self
    }

    /// Enable or disable the statistics sheet.
    pub fn with_statistics_sheet(mut self, enable: bool) -> Self {
        self.include_statistics_sheet = enable;
        self
    }

    /// Report filename including extension.
    pub fn report_filename(&self) -> String {
        format!("{}.{}", self.output_filename, self.format.extension())
    }
}

/// Request to process one uploaded document.
///
/// Deserializes from the camelCase JSON body used by upload clients; every
/// field except `filename` has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingRequest {
    /// Original name of the uploaded file
    pub filename: String,
    /// Report format
    #[serde(default)]
    pub output_format: ReportFormat,
    /// Report base name, without extension
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
    /// Add the category legend sheet
    #[serde(default = "default_true")]
    pub include_code_sheet: bool,
}

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

fn default_true() -> bool {
    true
}

impl ProcessingRequest {
    /// Create a request with defaults for everything but the filename.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            output_format: ReportFormat::default(),
            output_filename: default_output_filename(),
            include_code_sheet: true,
        }
    }

    /// Report filename including extension.
    pub fn report_filename(&self) -> String {
        format!("{}.{}", self.output_filename, self.output_format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.default_page, "N/A");
        assert_eq!(config.format, ReportFormat::Xlsx);
        assert!(config.include_code_sheet);
        assert!(config.include_statistics_sheet);
        assert_eq!(config.report_filename(), "proverbe_extrase.xlsx");
    }

    #[test]
    fn test_config_builder() {
        let config = ExtractionConfig::new()
            .with_default_page(LEGACY_PAGE_SENTINEL)
            .with_output_dir("out")
            .with_output_filename("colectie")
            .with_format(ReportFormat::Csv)
            .with_code_sheet(false)
            .with_statistics_sheet(false);

        assert_eq!(config.default_page, "7-17");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.report_filename(), "colectie.csv");
        assert!(!config.include_code_sheet);
        assert!(!config.include_statistics_sheet);
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("XLSX".parse::<ReportFormat>().unwrap(), ReportFormat::Xlsx);
        assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_processing_request_defaults() {
        let request: ProcessingRequest =
            serde_json::from_str(r#"{"filename": "Enciclopedia 7-17.pdf"}"#).unwrap();
        assert_eq!(request, ProcessingRequest::new("Enciclopedia 7-17.pdf"));
        assert_eq!(request.report_filename(), "proverbe_extrase.xlsx");
    }

    #[test]
    fn test_processing_request_camel_case() {
        let request: ProcessingRequest = serde_json::from_str(
            r#"{"filename": "a.pdf", "outputFormat": "csv", "outputFilename": "x", "includeCodeSheet": false}"#,
        )
        .unwrap();
        assert_eq!(request.output_format, ReportFormat::Csv);
        assert_eq!(request.report_filename(), "x.csv");
        assert!(!request.include_code_sheet);
    }
}
