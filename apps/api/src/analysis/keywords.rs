//! Keyword extraction — pluggable, trait-based strategy selected once at startup.
//!
//! `LinguisticExtractor` stems and drops stop-words; `FallbackExtractor`
//! is the plain tokenizer. Callers hold an `Arc<dyn KeywordExtractor>` and must
//! not assume which one is active.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::linguistic::{self, PartOfSpeech};
use crate::analysis::tokenizer::tokenize;

/// A deduplicated, lexicographically ordered set of keywords.
pub type KeywordSet = BTreeSet<String>;

/// Which extraction strategy is active. Reported to callers for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Linguistic,
    Fallback,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisMode::Linguistic => f.write_str("linguistic"),
            AnalysisMode::Fallback => f.write_str("fallback"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The keyword extraction strategy. Implement this to swap the linguistic
/// backend without touching the engine or handlers.
pub trait KeywordExtractor: Send + Sync {
    /// Lowercase, non-empty, deduplicated keywords of `text`.
    fn extract_keywords(&self, text: &str) -> KeywordSet;

    /// Lowercase words of `text` that are candidates for weak-verb detection,
    /// in order of appearance (duplicates allowed).
    fn verb_candidates(&self, text: &str) -> Vec<String>;

    fn mode(&self) -> AnalysisMode;
}

// ────────────────────────────────────────────────────────────────────────────
// LinguisticExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Alphabetic, non-stop-word base forms. Verb candidates are tokens tagged as verbs.
pub struct LinguisticExtractor;

impl KeywordExtractor for LinguisticExtractor {
    fn extract_keywords(&self, text: &str) -> KeywordSet {
        linguistic::analyze(&text.to_lowercase())
            .into_iter()
            .filter(|t| t.is_alpha && !t.is_stop)
            .map(|t| t.lemma.to_lowercase())
            .filter(|lemma| !lemma.is_empty())
            .collect()
    }

    fn verb_candidates(&self, text: &str) -> Vec<String> {
        linguistic::analyze(text)
            .into_iter()
            .filter(|t| t.pos == PartOfSpeech::Verb)
            .map(|t| t.text.to_lowercase())
            .collect()
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Linguistic
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Raw tokenizer output: no lemmas, no stop-word removal, every word is a verb candidate.
pub struct FallbackExtractor;

impl KeywordExtractor for FallbackExtractor {
    fn extract_keywords(&self, text: &str) -> KeywordSet {
        tokenize(text).into_iter().collect()
    }

    fn verb_candidates(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Fallback
    }
}

/// Builds the extractor for the configured capability. Degraded mode is logged, never raised.
pub fn select_extractor(linguistic_available: bool) -> Arc<dyn KeywordExtractor> {
    if linguistic_available {
        info!("Linguistic analysis available — using stemmed keyword extraction");
        Arc::new(LinguisticExtractor)
    } else {
        warn!(
            "Linguistic analysis unavailable — keyword extraction and action-word detection \
             running in fallback mode (raw tokens, no lemmas, no part-of-speech filter)"
        );
        Arc::new(FallbackExtractor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_fallback_keywords_are_raw_tokens() {
        let kws = FallbackExtractor.extract_keywords("I helped the team. The TEAM helped!");
        assert_eq!(kws, set(&["helped", "i", "team", "the"]));
    }

    #[test]
    fn test_fallback_empty_text() {
        assert!(FallbackExtractor.extract_keywords("").is_empty());
    }

    #[test]
    fn test_linguistic_keywords_drop_stop_words_and_lemmatize() {
        let kws = LinguisticExtractor.extract_keywords("I deployed the databases for teams.");
        let expected: KeywordSet = ["deploy", "database", "team"]
            .into_iter()
            .map(linguistic::lemmatize)
            .collect();
        assert_eq!(kws, expected);
        assert!(!kws.contains("the") && !kws.contains("i"));
    }

    #[test]
    fn test_linguistic_keywords_skip_numbers() {
        let kws = LinguisticExtractor.extract_keywords("5 clusters of Rust, 10k rps");
        assert!(kws.contains("rust"));
        assert!(kws.contains(&linguistic::lemmatize("cluster")));
        assert!(!kws.contains("5") && !kws.contains("10k"));
    }

    #[test]
    fn test_linguistic_unifies_silent_e_inflections() {
        let kws = LinguisticExtractor.extract_keywords("required requires scaled scales");
        assert_eq!(kws.len(), 2);
        assert_eq!(
            LinguisticExtractor.extract_keywords("required"),
            LinguisticExtractor.extract_keywords("requires")
        );
        assert_eq!(
            LinguisticExtractor.extract_keywords("scaled"),
            LinguisticExtractor.extract_keywords("scales")
        );
    }

    #[test]
    fn test_linguistic_unifies_inflections() {
        let a = LinguisticExtractor.extract_keywords("Managing cloud migrations");
        let b = LinguisticExtractor.extract_keywords("managed a cloud migration");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fallback_verb_candidates_are_all_tokens() {
        assert_eq!(
            FallbackExtractor.verb_candidates("Responsible for it"),
            vec!["responsible", "for", "it"]
        );
    }

    #[test]
    fn test_linguistic_verb_candidates_only_verbs() {
        let verbs = LinguisticExtractor.verb_candidates("Responsible for a used car; Helped sales");
        assert_eq!(verbs, vec!["helped"]);
    }

    #[test]
    fn test_output_never_contains_empty_strings() {
        for extractor in [select_extractor(true), select_extractor(false)] {
            let kws = extractor.extract_keywords("  --  ... !!! a  \n");
            assert!(kws.iter().all(|k| !k.is_empty()));
        }
    }

    #[test]
    #[traced_test]
    fn test_select_extractor_warns_on_fallback() {
        select_extractor(false);
        assert!(logs_contain("fallback mode"));
    }

    #[test]
    #[traced_test]
    fn test_select_extractor_quiet_when_linguistic() {
        select_extractor(true);
        assert!(!logs_contain("fallback mode"));
    }

    #[test]
    fn test_select_extractor_reports_mode() {
        assert_eq!(select_extractor(true).mode(), AnalysisMode::Linguistic);
        assert_eq!(select_extractor(false).mode(), AnalysisMode::Fallback);
        assert_eq!(AnalysisMode::Fallback.to_string(), "fallback");
    }
}
