//! Corpus-level statistics over tagged proverbs.
//!
//! Statistics are a fold over proverbs. [`StatisticsAccumulator::merge`] is associative,
//! with the left operand treated as the earlier part of the corpus, so a parallel
//! fold-then-reduce over an ordered sequence gives the same result as a sequential pass.

use crate::document::Proverb;
use crate::text::Category;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A proverb text together with its length in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverbLength {
    /// Proverb text
    pub text: String,
    /// Length in characters
    pub length: usize,
}

/// Summary statistics for a list of proverbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStatistics {
    /// Number of distinct source filenames
    pub total_files: usize,
    /// Number of proverbs
    pub total_proverbs: usize,
    /// Longest proverb; the first one wins ties
    pub longest: Option<ProverbLength>,
    /// Shortest proverb; the first one wins ties
    pub shortest: Option<ProverbLength>,
    /// Mean length in characters, 0 for an empty corpus
    pub average_length: f64,
    /// Tag count per category code, in first-seen order
    pub pos_distribution: IndexMap<String, usize>,
}

impl Default for CorpusStatistics {
    fn default() -> Self {
        StatisticsAccumulator::new().finish()
    }
}

impl CorpusStatistics {
    /// Compute statistics in a single pass over `proverbs`.
    pub fn from_proverbs(proverbs: &[Proverb]) -> Self {
        let mut acc = StatisticsAccumulator::new();
        for proverb in proverbs {
            acc.push(proverb);
        }
        acc.finish()
    }

    /// Tag count for `category`, 0 when no tag of that category was seen.
    pub fn count_for(&self, category: Category) -> usize {
        self.pos_distribution
            .get(category.code())
            .copied()
            .unwrap_or(0)
    }

    /// Distribution over every category in legend order, absent codes as 0.
    pub fn legend_distribution(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.count_for(category)))
            .collect()
    }
}

/// Running state for computing [`CorpusStatistics`].
#[derive(Debug, Clone, Default)]
pub struct StatisticsAccumulator {
    files: IndexSet<String>,
    total_proverbs: usize,
    total_length: usize,
    longest: Option<ProverbLength>,
    shortest: Option<ProverbLength>,
    pos_distribution: IndexMap<String, usize>,
}

impl StatisticsAccumulator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one more proverb, seen after every proverb pushed so far.
    pub fn push(&mut self, proverb: &Proverb) {
        if !self.files.contains(&proverb.source_filename) {
            self.files.insert(proverb.source_filename.clone());
        }
        let length = proverb.char_len();
        self.total_proverbs += 1;
        self.total_length += length;

        if self.longest.as_ref().map_or(true, |l| length > l.length) {
            self.longest = Some(ProverbLength {
                text: proverb.text.clone(),
                length,
            });
        }
        if self.shortest.as_ref().map_or(true, |s| length < s.length) {
            self.shortest = Some(ProverbLength {
                text: proverb.text.clone(),
                length,
            });
        }

        for tag in &proverb.pos_tags {
            *self.pos_distribution.entry(tag.code().to_string()).or_insert(0) += 1;
        }
    }

    /// Combine with the statistics of proverbs that come after this one's.
    pub fn merge(mut self, later: StatisticsAccumulator) -> Self {
        self.files.extend(later.files);
        self.total_proverbs += later.total_proverbs;
        self.total_length += later.total_length;

        self.longest = match (self.longest, later.longest) {
            (Some(a), Some(b)) if b.length > a.length => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };
        self.shortest = match (self.shortest, later.shortest) {
            (Some(a), Some(b)) if b.length < a.length => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };

        for (code, count) in later.pos_distribution {
            *self.pos_distribution.entry(code).or_insert(0) += count;
        }
        self
    }

    /// Produce the final statistics.
    pub fn finish(self) -> CorpusStatistics {
        let average_length = if self.total_proverbs == 0 {
            0.0
        } else {
            self.total_length as f64 / self.total_proverbs as f64
        };
        CorpusStatistics {
            total_files: self.files.len(),
            total_proverbs: self.total_proverbs,
            longest: self.longest,
            shortest: self.shortest,
            average_length,
            pos_distribution: self.pos_distribution,
        }
    }
}
