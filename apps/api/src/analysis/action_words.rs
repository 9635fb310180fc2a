//! Action-word advisor — flags weak verbs and proposes stronger phrasing.
//!
//! In fallback mode every token is checked, not only verbs, so adjectival uses
//! ("a used laptop", "responsible for") are flagged too. That imprecision is
//! kept as-is.

use std::collections::BTreeMap;

use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::lexicon::strong_alternative;

/// Weak verb (lowercase) → suggested replacement phrase. One entry per distinct weak word.
pub type SuggestionMap = BTreeMap<String, String>;

pub fn suggest_action_words(extractor: &dyn KeywordExtractor, text: &str) -> SuggestionMap {
    extractor
        .verb_candidates(text)
        .into_iter()
        .filter_map(|word| strong_alternative(&word).map(|strong| (word, strong.to_string())))
        .collect()
}
