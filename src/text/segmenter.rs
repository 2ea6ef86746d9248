//! Proverb segmentation for extracted PDF text.
//!
//! Text coming out of a PDF extractor is a stream of short lines: wrapped
//! sentences, running page numbers, numbered-list residue and decorative glyphs.
//! The segmenter rebuilds sentence-like units from those lines.
//!
//! # Algorithm
//!
//! 1. Split on `\n`, trim whitespace and byte-order marks from every line and drop
//!    the empty ones
//! 2. Drop extraction artifacts: `12:` style line numbers, `Page 7` and bare digit lines
//! 3. Join surviving lines with a single space until a line ends with `.`, `!`, `?` or `:`
//! 4. A closed candidate of 15..=500 characters has its leading `* ♦ < >` run stripped
//!    and is kept if at least 10 characters remain
//! 5. Unterminated trailing content goes through the same checks
//!
//! The 15/10 split lets a candidate lose a few leading glyphs without letting short
//! fragments through. Lengths are counted in `char`s.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Line numbers left behind by extraction, e.g. "12:" or "3: text"
    static ref RE_LINE_NUMBER: Regex = Regex::new(r"^[0-9]+:").unwrap();

    /// Running page numbers: "Page 12" or a line that is only digits
    static ref RE_PAGE_ARTIFACT: Regex = Regex::new(r"(?i)^(?:page [0-9]+|[0-9]+)$").unwrap();
}

/// Minimum length of a closed candidate before the leading-symbol strip.
pub const MIN_CANDIDATE_CHARS: usize = 15;

/// Maximum length of any candidate.
pub const MAX_CANDIDATE_CHARS: usize = 500;

/// Minimum length of an emitted proverb after the leading-symbol strip.
pub const MIN_PROVERB_CHARS: usize = 10;

/// Characters that close a proverb candidate when they end a line.
const CLOSING_PUNCTUATION: [char; 4] = ['.', '!', '?', ':'];

/// Trim whitespace and stray U+FEFF byte-order marks from both ends of a line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Splits raw extracted text into proverb strings.
///
/// Stateless: one segmenter can be shared across threads and documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProverbSegmenter;

impl ProverbSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        Self
    }

    /// Segment `raw_text` into proverbs, in document order.
    ///
    /// Never fails: text without qualifying lines yields an empty list.
    pub fn segment(&self, raw_text: &str) -> Vec<String> {
        let mut proverbs = Vec::new();
        let mut buffer = String::new();

        for line in raw_text.split('\n').map(trim_line) {
            if line.is_empty() || Self::is_artifact(line) {
                continue;
            }

            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(line);

            if line.ends_with(CLOSING_PUNCTUATION) {
                let candidate = buffer.trim();
                let length = candidate.chars().count();
                if (MIN_CANDIDATE_CHARS..=MAX_CANDIDATE_CHARS).contains(&length) {
                    if let Some(proverb) = Self::finish_candidate(candidate) {
                        proverbs.push(proverb);
                    }
                }
                buffer.clear();
            }
        }

        let trailing = buffer.trim();
        let length = trailing.chars().count();
        if (MIN_CANDIDATE_CHARS..=MAX_CANDIDATE_CHARS).contains(&length) {
            if let Some(proverb) = Self::finish_candidate(trailing) {
                proverbs.push(proverb);
            }
        }

        proverbs
    }

    /// Whether a trimmed line is an extraction artifact rather than content.
    pub fn is_artifact(line: &str) -> bool {
        RE_LINE_NUMBER.is_match(line) || RE_PAGE_ARTIFACT.is_match(line)
    }

    /// Strip the leading decoration run and apply the final length floor.
    fn finish_candidate(candidate: &str) -> Option<String> {
        let cleaned = strip_leading_symbols(candidate).trim();
        if cleaned.chars().count() >= MIN_PROVERB_CHARS {
            Some(cleaned.to_string())
        } else {
            None
        }
    }
}

/// Remove a leading run of `*`, `♦`, `<`, `>` and whitespace.
pub fn strip_leading_symbols(text: &str) -> &str {
    text.trim_start_matches(|c: char| matches!(c, '*' | '♦' | '<' | '>') || c.is_whitespace())
}
