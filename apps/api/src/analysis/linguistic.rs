//! Rule-based English analyzer: segmentation, stop-word flags, stems and a coarse verb tag.
//!
//! This is the linguistic-analysis capability behind `LinguisticExtractor`.
//! Stop-words come from the `stop-words` English list and inflections are
//! reduced with the Snowball English stemmer, after an irregular-form table
//! maps forms the stemmer cannot relate (`built`, `was`) to their base word.
//! The verb tag only looks at inflection and the immediately preceding word.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Verb,
    Determiner,
    Other,
}

/// One segmented token with its linguistic annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    /// Surface form as it appeared in the input.
    pub text: String,
    /// Lowercase base form (Snowball stem). Inflections of one word share it.
    pub lemma: String,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub pos: PartOfSpeech,
}

// ────────────────────────────────────────────────────────────────────────────
// Word lists
// ────────────────────────────────────────────────────────────────────────────

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "our", "your", "their", "his",
    "her", "its", "some", "any", "each", "every", "no",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "we", "you", "they", "he", "she"];

/// Irregular inflections → base word, applied before stemming.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("made", "make"), ("led", "lead"), ("built", "build"),
    ("ran", "run"), ("wrote", "write"), ("written", "write"), ("taught", "teach"),
    ("brought", "bring"), ("bought", "buy"), ("thought", "think"), ("began", "begin"),
    ("begun", "begin"), ("grew", "grow"), ("grown", "grow"), ("drove", "drive"),
    ("driven", "drive"), ("won", "win"), ("held", "hold"), ("kept", "keep"), ("met", "meet"),
    ("sent", "send"), ("spent", "spend"), ("took", "take"), ("taken", "take"),
    ("gave", "give"), ("given", "give"), ("went", "go"), ("gone", "go"), ("got", "get"),
    ("gotten", "get"), ("chose", "choose"), ("chosen", "choose"), ("saw", "see"),
    ("seen", "see"), ("found", "find"), ("told", "tell"), ("said", "say"), ("paid", "pay"),
    ("became", "become"), ("knew", "know"), ("known", "know"), ("understood", "understand"),
    ("spoke", "speak"), ("spoken", "speak"), ("sold", "sell"), ("felt", "feel"),
    ("left", "leave"), ("meant", "mean"), ("caught", "catch"), ("fought", "fight"),
    ("oversaw", "oversee"), ("undertook", "undertake"), ("men", "man"), ("women", "woman"),
    ("children", "child"), ("analyses", "analysis"),
];

/// Plural nouns in `IRREGULAR_FORMS`; their base words are not verbs.
const IRREGULAR_NOUNS: &[&str] = &["man", "woman", "child", "analysis"];

/// Words kept verbatim: product names the stemmer would mangle, and
/// `-ed`/`-ing` words that are not verb inflections.
const INVARIANT_WORDS: &[&str] = &[
    "always", "analytics", "aws", "bed", "breed", "ceiling", "chaos", "devops", "economics",
    "embed", "evening", "exceed", "feed", "greed", "hundred", "indeed", "ios", "jenkins",
    "kubernetes", "kudos", "macos", "mathematics", "morning", "naked", "need", "news",
    "nothing", "perhaps", "physics", "postgres", "proceed", "redis", "sacred", "sales",
    "seed", "series", "shed", "species", "speed", "spring", "statistics", "string", "succeed",
    "thing", "windows", "wicked",
];

fn stop_words() -> &'static HashSet<String> {
    static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| {
        get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_string())
            .collect()
    })
}

fn stemmer() -> &'static Stemmer {
    static STEMMER: OnceLock<Stemmer> = OnceLock::new();
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

fn irregular_forms() -> &'static HashMap<&'static str, &'static str> {
    static IRREGULAR: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    IRREGULAR.get_or_init(|| IRREGULAR_FORMS.iter().copied().collect())
}

pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word)
}

fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(&word)
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Segments `text` into alphanumeric runs and annotates each one.
pub fn analyze(text: &str) -> Vec<AnalyzedToken> {
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    words
        .iter()
        .zip(&lowered)
        .enumerate()
        .map(|(i, (surface, lower))| {
            let prev = i.checked_sub(1).map(|p| lowered[p].as_str());
            let is_alpha = surface.chars().all(char::is_alphabetic);
            AnalyzedToken {
                text: surface.to_string(),
                lemma: if is_alpha { lemmatize(lower) } else { lower.clone() },
                is_alpha,
                is_stop: is_stop_word(lower),
                pos: tag(lower, prev, is_alpha),
            }
        })
        .collect()
}

fn tag(word: &str, prev: Option<&str>, is_alpha: bool) -> PartOfSpeech {
    if is_determiner(word) {
        return PartOfSpeech::Determiner;
    }
    if !is_alpha {
        return PartOfSpeech::Other;
    }
    match prev {
        Some(p) if is_determiner(p) => PartOfSpeech::Other,
        Some("to") => PartOfSpeech::Verb,
        Some(p) if SUBJECT_PRONOUNS.contains(&p) => PartOfSpeech::Verb,
        _ if looks_inflected_verb(word) => PartOfSpeech::Verb,
        _ => PartOfSpeech::Other,
    }
}

fn looks_inflected_verb(word: &str) -> bool {
    if INVARIANT_WORDS.contains(&word) {
        return false;
    }
    if let Some(base) = irregular_forms().get(word) {
        return !IRREGULAR_NOUNS.contains(base);
    }
    (word.len() >= 4 && word.ends_with("ed") && !word.ends_with("eed"))
        || (word.len() > 5 && word.ends_with("ing"))
}

/// Reduces a lowercase word to its base form: irregular override, then the
/// English stemmer. Other short words and invariant words are returned as-is.
pub fn lemmatize(word: &str) -> String {
    if let Some(base) = irregular_forms().get(word) {
        return stemmer().stem(base).into_owned();
    }
    if word.len() <= 3 || INVARIANT_WORDS.contains(&word) {
        return word.to_string();
    }
    stemmer().stem(word).into_owned()
}
