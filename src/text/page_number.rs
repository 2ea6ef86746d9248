//! Page numbers recovered from source filenames.
//!
//! Scanned collections are usually split one file per page, with names like
//! `Enciclopedia_Page_006_ocred.pdf`, or carry the page range in the name, like
//! `Enciclopedia 7-17.pdf`.

use crate::config::DEFAULT_PAGE_SENTINEL;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "_Page_006_" marker from per-page scans
    static ref RE_PAGE_MARKER: Regex = Regex::new(r"(?i)_Page_([0-9]+)_").unwrap();

    /// First number or number range anywhere in the name
    static ref RE_NUMBER_RANGE: Regex = Regex::new(r"([0-9]+(?:-[0-9]+)?)").unwrap();
}

/// Extracts a page number or range from a filename.
///
/// The sentinel returned when nothing matches is part of the extractor's
/// configuration, since call sites disagree on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberExtractor {
    sentinel: String,
}

impl Default for PageNumberExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SENTINEL)
    }
}

impl PageNumberExtractor {
    /// Create an extractor that falls back to `sentinel`.
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    /// Value returned when the filename carries no number.
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Page number for `filename`.
    pub fn extract(&self, filename: &str) -> String {
        if let Some(caps) = RE_PAGE_MARKER.captures(filename) {
            return caps[1].to_string();
        }
        match RE_NUMBER_RANGE.captures(filename) {
            Some(caps) => caps[1].to_string(),
            None => self.sentinel.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEGACY_PAGE_SENTINEL;

    #[test]
    fn test_page_marker() {
        let extractor = PageNumberExtractor::default();
        assert_eq!(extractor.extract("doc_Page_006_ocred.pdf"), "006");
        assert_eq!(extractor.extract("scan_page_12_v2.pdf"), "12");
    }

    #[test]
    fn test_page_marker_wins_over_earlier_numbers() {
        let extractor = PageNumberExtractor::default();
        assert_eq!(
            extractor.extract("Colecţie (2000) 9785919262401_Page_006_ocred.pdf"),
            "006"
        );
    }

    #[test]
    fn test_marker_requires_trailing_underscore() {
        let extractor = PageNumberExtractor::default();
        assert_eq!(extractor.extract("doc_Page_7.pdf"), "7");
    }

    #[test]
    fn test_number_range_fallback() {
        let extractor = PageNumberExtractor::default();
        assert_eq!(extractor.extract("report_7-17.pdf"), "7-17");
        assert_eq!(extractor.extract("Enciclopedia înţelepciunii 7-17.pdf"), "7-17");
        assert_eq!(extractor.extract("volum2.pdf"), "2");
        assert_eq!(extractor.extract("pagina-5.pdf"), "5");
    }

    #[test]
    fn test_sentinel_is_configurable() {
        assert_eq!(PageNumberExtractor::default().extract("plain.pdf"), "N/A");
        let legacy = PageNumberExtractor::new(LEGACY_PAGE_SENTINEL);
        assert_eq!(legacy.extract("plain.pdf"), "7-17");
        assert_eq!(legacy.sentinel(), "7-17");
        assert_eq!(PageNumberExtractor::new("NA").extract(""), "NA");
    }
}
