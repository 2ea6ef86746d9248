//! Part-of-speech categories and the curated Romanian lexicons.
//!
//! Both tables are ordered slices rather than maps: the position of an entry is its
//! priority. A word listed under several categories (`cel` is both noun and pronoun,
//! `la` could be a preposition or an article) takes the first category that matches.
//!
//! The word lists keep the exact diacritics found in the source collections, which mix
//! cedilla (`ş`, `ţ`) and comma-below (`ș`) forms. Matching is case-insensitive.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Substantiv (noun)
    Substantiv,
    /// Adjectiv (adjective)
    Adjectiv,
    /// Verb
    Verb,
    /// Pronume (pronoun)
    Pronume,
    /// Numeral
    Numeral,
    /// Articol (article)
    Articol,
    /// Interjecție (interjection)
    Interjectie,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 7] = [
        Category::Substantiv,
        Category::Adjectiv,
        Category::Verb,
        Category::Pronume,
        Category::Numeral,
        Category::Articol,
        Category::Interjectie,
    ];

    /// Short code used as the tag prefix.
    pub fn code(self) -> &'static str {
        match self {
            Category::Substantiv => "s",
            Category::Adjectiv => "a",
            Category::Verb => "v",
            Category::Pronume => "p",
            Category::Numeral => "n",
            Category::Articol => "art",
            Category::Interjectie => "i",
        }
    }

    /// Romanian category name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Substantiv => "substantiv",
            Category::Adjectiv => "adjectiv",
            Category::Verb => "verb",
            Category::Pronume => "pronume",
            Category::Numeral => "numeral",
            Category::Articol => "articol",
            Category::Interjectie => "interjectie",
        }
    }

    /// Plural label used in report legends.
    pub fn label(self) -> &'static str {
        match self {
            Category::Substantiv => "Substantive (Nouns)",
            Category::Adjectiv => "Adjective (Adjectives)",
            Category::Verb => "Verbe (Verbs)",
            Category::Pronume => "Pronume (Pronouns)",
            Category::Numeral => "Numerale (Numerals)",
            Category::Articol => "Articole (Articles)",
            Category::Interjectie => "Interjecții (Interjections)",
        }
    }

    /// Look up a category by its short code.
    pub fn from_code(code: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Position in [`Category::ALL`], used to index counter arrays.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Order in which lexicons are consulted.
pub const LEXICON_ORDER: [Category; 7] = [
    Category::Verb,
    Category::Substantiv,
    Category::Adjectiv,
    Category::Pronume,
    Category::Articol,
    Category::Numeral,
    Category::Interjectie,
];

const VERBS: &[&str] = &[
    "e", "este", "sunt", "era", "erau", "fi", "a", "să", "face", "făcut", "provoca", "ajunge",
    "cunoaște", "cunoaștem", "cunosc", "trăiește", "simte", "vorbeşte", "creează", "urmează",
    "există", "repetă", "bucurându", "eliberat", "neîncătuşată", "împărtăşeşte", "atinge",
    "instaleză",
];

const NOUNS: &[&str] = &[
    "fapta", "partea", "omul", "oameni", "dreptatea", "virtutea", "prietenul", "prietenii",
    "nevasta", "barca", "călătorului", "sluga", "slugi", "umbre", "cel", "lacom", "celui",
    "merituos", "tovarăşul", "drum", "fiul", "împărat", "prieten", "stăpânul", "faptelor",
    "ureche", "împunsătura", "vorbei", "binele", "bine", "mal", "căi", "cinstit", "teafăr",
    "aproapelui", "răul", "sufletul", "prihană", "urmare", "fericirea", "nefericirea", "folosul",
    "fiinţe", "efort", "virtuosului", "mulţumire", "propria", "viciile", "raţiunea",
    "îndrăzneala", "nevoie", "eroul", "bătălie", "achitarea", "datoriei", "sărăcie", "rudele",
    "necazuri", "plăcerea", "mii", "luptă", "pasiune", "ură", "ignoranţă", "cunoaşterea", "lumea",
    "aceasta", "cealaltă", "sfinţenie", "intenţiilor", "acumularea", "bucurie",
];

const ADJECTIVES: &[&str] = &[
    "merituos", "bun", "buni", "rău", "cinstit", "lacom", "priceput", "nepriceput", "măreţ",
    "ruşinos", "nemuritoare", "adevărat", "adevărată", "teafăr", "mare", "propria", "neîntrerupt",
    "multă", "reciprocă", "marele", "scrise", "dharmei", "neataşat", "dureroasă",
];

const PRONOUNS: &[&str] = &[
    "cel", "cea", "cei", "cele", "el", "ea", "ei", "ele", "acesta", "aceasta", "aceștia",
    "acestea", "unui", "unei", "sine", "însuşi", "altul", "cineva", "ţie", "însuţi", "se", "îşi",
    "ai", "nici", "pentru", "care", "unde", "când",
];

const ARTICLES: &[&str] = &[
    "un", "o", "unei", "unui", "ale", "ai", "al", "la", "în", "de", "pe", "cu", "din", "până",
    "după", "către", "asupra", "dintre", "printre",
];

const NUMERALS: &[&str] = &[
    "cinci", "cincisprezece", "doi", "trei", "patru", "primul", "doilea", "mii", "una", "două",
    "multe", "puţin", "mai", "foarte", "tot", "toată", "toate", "câştig", "pierdere",
];

const INTERJECTIONS: &[&str] = &[
    "ah", "oh", "vai", "uite", "iată", "da", "nu", "nici", "chiar", "iar", "şi", "sau", "dar",
    "ca", "că", "dacă", "când", "unde", "cum", "de", "ce", "pentru", "până", "după",
];

/// Word list for a category.
pub fn words(category: Category) -> &'static [&'static str] {
    match category {
        Category::Verb => VERBS,
        Category::Substantiv => NOUNS,
        Category::Adjectiv => ADJECTIVES,
        Category::Pronume => PRONOUNS,
        Category::Articol => ARTICLES,
        Category::Numeral => NUMERALS,
        Category::Interjectie => INTERJECTIONS,
    }
}

/// Build a case-insensitive whole-token pattern from a word list.
fn whole_token_pattern(words: &[&str]) -> Regex {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    RegexBuilder::new(&format!("^(?:{})$", alternatives.join("|")))
        .case_insensitive(true)
        .build()
        .unwrap()
}

lazy_static! {
    /// Lexicon matchers in priority order.
    static ref LEXICON: Vec<(Category, Regex)> = LEXICON_ORDER
        .iter()
        .map(|&category| (category, whole_token_pattern(words(category))))
        .collect();
}

/// First category whose lexicon contains `word`, if any.
pub fn lookup(word: &str) -> Option<Category> {
    LEXICON
        .iter()
        .find(|(_, pattern)| pattern.is_match(word))
        .map(|(category, _)| *category)
}

/// Suffix rules tried when no lexicon matches, in priority order.
///
/// Matching is case-sensitive. Because `ă` and `e` are adjective endings, most
/// `-ează`/`-eşte` verbs land on the adjective rule; only `-esc` reaches the verb rule.
pub const SUFFIX_RULES: &[(Category, &[&str])] = &[
    (Category::Substantiv, &["ul", "ea", "ia", "ului", "elor"]),
    (Category::Adjectiv, &["ă", "e", "it", "os"]),
    (Category::Verb, &["ează", "eşte", "esc"]),
];

/// Tokens this short or shorter are never guessed from their suffix.
pub const MIN_SUFFIX_WORD_CHARS: usize = 2;

/// Category guessed from the ending of `word`, if any rule applies.
pub fn guess_from_suffix(word: &str) -> Option<Category> {
    if word.chars().count() <= MIN_SUFFIX_WORD_CHARS {
        return None;
    }
    SUFFIX_RULES
        .iter()
        .find(|(_, suffixes)| suffixes.iter().any(|s| word.ends_with(*s)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        let codes: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["s", "a", "v", "p", "n", "art", "i"]);
    }

    #[test]
    fn test_from_code_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("x"), None);
        assert_eq!(Category::from_code("ar"), None);
    }

    #[test]
    fn test_slots_are_dense() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.slot(), i);
        }
    }

    #[test]
    fn test_lookup_priority() {
        // "cel" is listed as noun and pronoun; nouns are consulted first.
        assert_eq!(lookup("cel"), Some(Category::Substantiv));
        // "ai" is listed as pronoun and article; pronouns come first.
        assert_eq!(lookup("ai"), Some(Category::Pronume));
        // "de" is listed as article and interjection.
        assert_eq!(lookup("de"), Some(Category::Articol));
        // "mii" is listed as noun and numeral.
        assert_eq!(lookup("mii"), Some(Category::Substantiv));
        // "a" is a verb before anything else.
        assert_eq!(lookup("a"), Some(Category::Verb));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("Barca"), Some(Category::Substantiv));
        assert_eq!(lookup("ESTE"), Some(Category::Verb));
        assert_eq!(lookup("În"), Some(Category::Articol));
        assert_eq!(lookup("Şi"), Some(Category::Interjectie));
    }

    #[test]
    fn test_lookup_is_whole_token() {
        assert_eq!(lookup("barcagiu"), None);
        assert_eq!(lookup("abarca"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_lookup_keeps_diacritic_variants_distinct() {
        // The verb list spells "cunoaște" with comma-below ș only.
        assert_eq!(lookup("cunoaște"), Some(Category::Verb));
        assert_eq!(lookup("cunoaşte"), None);
    }

    #[test]
    fn test_guess_from_suffix_order() {
        assert_eq!(guess_from_suffix("copilul"), Some(Category::Substantiv));
        assert_eq!(guess_from_suffix("casa"), None);
        assert_eq!(guess_from_suffix("frumoasă"), Some(Category::Adjectiv));
        assert_eq!(guess_from_suffix("vorbit"), Some(Category::Adjectiv));
        assert_eq!(guess_from_suffix("muncesc"), Some(Category::Verb));
        // "-ează" ends in "ă", so the adjective rule wins.
        assert_eq!(guess_from_suffix("lucrează"), Some(Category::Adjectiv));
        // "-elor" ends in "or", which only the noun rule covers.
        assert_eq!(guess_from_suffix("oamenilor"), None);
        assert_eq!(guess_from_suffix("faptelor"), Some(Category::Substantiv));
    }

    #[test]
    fn test_guess_from_suffix_is_case_sensitive() {
        assert_eq!(guess_from_suffix("COPILUL"), None);
    }

    #[test]
    fn test_guess_from_suffix_ignores_short_words() {
        assert_eq!(guess_from_suffix("ul"), None);
        assert_eq!(guess_from_suffix("ea"), None);
        assert_eq!(guess_from_suffix("bea"), Some(Category::Substantiv));
    }
}
