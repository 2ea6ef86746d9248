//! Proverb segmentation and part-of-speech tagging.
//!
//! This is the pure core of the crate: no I/O, no shared state, no failure modes.
//!
//! ```text
//! raw text ──[ProverbSegmenter]──▶ proverb strings ──[PosTagger]──▶ PosTag[] per proverb
//! filename ──[PageNumberExtractor]──▶ page number
//! ```

pub mod lexicon;
pub mod page_number;
pub mod segmenter;
pub mod tagger;

pub use lexicon::{Category, LEXICON_ORDER, SUFFIX_RULES};
pub use page_number::PageNumberExtractor;
pub use segmenter::ProverbSegmenter;
pub use tagger::{PosTag, PosTagger, TagCounters};
