//! Heuristic part-of-speech tagging with per-category numbering.
//!
//! Each whitespace-delimited token of a proverb is cleaned, looked up in the ordered
//! lexicons, and failing that guessed from its suffix. A tagged token gets the
//! category code followed by that category's running count within the proverb:
//! the first noun is `s1`, the second `s2`, the first article `art1`.
//!
//! Counters live in a [`TagCounters`] value created for each call to
//! [`PosTagger::tag`], so numbering always restarts at 1 for the next proverb and
//! concurrent tagging never shares state.

use crate::text::lexicon::{self, Category};
use serde::{Deserialize, Serialize};

/// Characters stripped from the end of a token, at most one.
const TRAILING_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '"', '„', '“', '”', '«', '»', '[', ']', '{', '}',
    '–', '—',
];

/// Characters stripped from the start of a token, at most one. Sentence
/// punctuation and parentheses are left in place here.
const LEADING_PUNCTUATION: &[char] = &[
    '"', '„', '“', '”', '«', '»', '[', ']', '{', '}', '–', '—',
];

/// A tagged word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTag {
    /// Cleaned token, diacritics preserved
    pub word: String,
    /// Category code plus per-proverb counter, e.g. `s3` or `art1`
    pub tag: String,
    /// Position of the originating token in the whitespace split of the proverb
    pub index: usize,
}

impl PosTag {
    /// Category code of this tag (`"s3"` → `"s"`).
    pub fn code(&self) -> &str {
        self.tag.trim_end_matches(|c: char| c.is_ascii_digit())
    }

    /// Category of this tag, if the code is known.
    pub fn category(&self) -> Option<Category> {
        Category::from_code(self.code())
    }

    /// Counter value of this tag (`"art2"` → `2`).
    pub fn number(&self) -> Option<u32> {
        self.tag[self.code().len()..].parse().ok()
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tag, self.word)
    }
}

/// Running counters for one tagging pass, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCounters {
    next: [u32; 7],
}

impl Default for TagCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl TagCounters {
    /// Every category starts at 1.
    pub fn new() -> Self {
        Self { next: [1; 7] }
    }

    /// Next tag for `category`, advancing its counter.
    pub fn issue(&mut self, category: Category) -> String {
        let slot = category.slot();
        let tag = format!("{}{}", category.code(), self.next[slot]);
        self.next[slot] += 1;
        tag
    }

    /// Value the next tag of `category` would carry.
    pub fn peek(&self, category: Category) -> u32 {
        self.next[category.slot()]
    }
}

/// Strip one trailing punctuation, quote or dash character, then one leading
/// quote, bracket or dash character.
pub fn clean_token(token: &str) -> &str {
    let token = token.strip_suffix(TRAILING_PUNCTUATION).unwrap_or(token);
    token.strip_prefix(LEADING_PUNCTUATION).unwrap_or(token)
}

/// Category for a cleaned token: lexicon first, then suffix rules.
pub fn classify(word: &str) -> Option<Category> {
    lexicon::lookup(word).or_else(|| lexicon::guess_from_suffix(word))
}

/// Part-of-speech tagger for single proverbs.
///
/// Stateless and pure: the same input always yields the same tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new tagger.
    pub fn new() -> Self {
        Self
    }

    /// Tag every recognisable token of `proverb`, in token order.
    ///
    /// Untagged tokens are omitted but still consume their `index`.
    pub fn tag(&self, proverb: &str) -> Vec<PosTag> {
        let mut counters = TagCounters::new();
        let mut tags = Vec::new();

        for (index, token) in proverb.split_whitespace().enumerate() {
            let word = clean_token(token);
            if let Some(category) = classify(word) {
                tags.push(PosTag {
                    word: word.to_string(),
                    tag: counters.issue(category),
                    index,
                });
            }
        }

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(text: &str) -> Vec<(String, String, usize)> {
        PosTagger::new()
            .tag(text)
            .into_iter()
            .map(|t| (t.word, t.tag, t.index))
            .collect()
    }

    fn t(word: &str, tag: &str, index: usize) -> (String, String, usize) {
        (word.to_string(), tag.to_string(), index)
    }

    #[test]
    fn test_barca_example() {
        assert_eq!(
            tags_of("Barca nu ajunge la mal pe căi ocolite."),
            vec![
                t("Barca", "s1", 0),
                t("nu", "i1", 1),
                t("ajunge", "v1", 2),
                t("la", "art1", 3),
                t("mal", "s2", 4),
                t("pe", "art2", 5),
                t("căi", "s3", 6),
                t("ocolite", "a1", 7),
            ]
        );
    }

    #[test]
    fn test_dreptatea_example() {
        assert_eq!(
            tags_of("Dreptatea e nemuritoare."),
            vec![t("Dreptatea", "s1", 0), t("e", "v1", 1), t("nemuritoare", "a1", 2)]
        );
    }

    #[test]
    fn test_untagged_tokens_keep_their_index() {
        // "consta" and "ochi" match nothing.
        let tags = tags_of("Virtutea consta ochi mare.");
        assert_eq!(tags, vec![t("Virtutea", "s1", 0), t("mare", "a1", 3)]);
    }

    #[test]
    fn test_counters_restart_per_proverb() {
        let tagger = PosTagger::new();
        let first = tagger.tag("Prietenul, nevasta, sluga, raţiunea şi îndrăzneala.");
        let nouns: Vec<&str> = first
            .iter()
            .filter(|t| t.code() == "s")
            .map(|t| t.tag.as_str())
            .collect();
        assert_eq!(nouns, vec!["s1", "s2", "s3", "s4", "s5"]);

        let second = tagger.tag("Omul cinstit.");
        assert_eq!(second[0].tag, "s1");
    }

    #[test]
    fn test_clean_token_strips_one_char_per_end() {
        assert_eq!(clean_token("mal."), "mal");
        assert_eq!(clean_token("«Barca»"), "Barca");
        assert_eq!(clean_token("„bine”"), "bine");
        assert_eq!(clean_token("(drum),"), "(drum)");
        assert_eq!(clean_token("[drum]"), "drum");
        assert_eq!(clean_token("nevoie..."), "nevoie..");
        assert_eq!(clean_token("—"), "");
        assert_eq!(clean_token("s-a"), "s-a");
    }

    #[test]
    fn test_leading_sentence_punctuation_is_kept() {
        assert_eq!(clean_token("(Barca"), "(Barca");
        assert_eq!(clean_token(".de"), ".de");
        assert_eq!(clean_token(",nu"), ",nu");
        // Kept characters block the lexicon; only suffix rules can still apply.
        assert!(tags_of("(Barca").is_empty());
        assert_eq!(tags_of("(bine"), vec![t("(bine", "a1", 0)]);
        assert_eq!(tags_of(".de"), vec![t(".de", "a1", 0)]);
        assert_eq!(tags_of("„bine"), vec![t("bine", "s1", 0)]);
    }

    #[test]
    fn test_over_punctuated_token_is_not_matched() {
        // Only one trailing character is removed, so "mal.." stays "mal.".
        assert!(tags_of("mal..").is_empty());
    }

    #[test]
    fn test_suffix_fallback() {
        assert_eq!(
            tags_of("copilul frumoasă muncesc"),
            vec![t("copilul", "s1", 0), t("frumoasă", "a1", 1), t("muncesc", "v1", 2)]
        );
    }

    #[test]
    fn test_short_unknown_tokens_are_skipped() {
        assert!(tags_of("ea").len() == 1); // lexicon pronoun
        assert!(tags_of("xe zz").is_empty());
    }

    #[test]
    fn test_empty_proverb() {
        assert!(PosTagger::new().tag("").is_empty());
        assert!(PosTagger::new().tag("   \t ").is_empty());
    }

    #[test]
    fn test_pos_tag_accessors() {
        let tag = PosTag {
            word: "la".to_string(),
            tag: "art12".to_string(),
            index: 3,
        };
        assert_eq!(tag.code(), "art");
        assert_eq!(tag.category(), Some(Category::Articol));
        assert_eq!(tag.number(), Some(12));
        assert_eq!(tag.to_string(), "art12:la");
    }

    #[test]
    fn test_tag_counters() {
        let mut counters = TagCounters::new();
        assert_eq!(counters.issue(Category::Articol), "art1");
        assert_eq!(counters.issue(Category::Articol), "art2");
        assert_eq!(counters.issue(Category::Interjectie), "i1");
        assert_eq!(counters.peek(Category::Articol), 3);
        assert_eq!(counters.peek(Category::Verb), 1);
    }
}
