//! Readability estimate from sentence and word length.
//!
//! This is a heuristic proxy, not a validated readability metric such as
//! Flesch–Kincaid: shorter sentences and shorter words score higher, and
//! nothing about vocabulary, syllables or structure is considered.

use regex::Regex;

use crate::analysis::tokenizer::tokenize;

pub const MIN_READABILITY: u32 = 10;
pub const MAX_READABILITY: u32 = 95;
/// Returned when the text has no sentences or no words.
pub const NEUTRAL_READABILITY: u32 = 50;

/// Splits on runs of `.`, `?`, `!` and newlines.
pub struct ReadabilityEstimator {
    sentence_boundary: Regex,
}

impl ReadabilityEstimator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            sentence_boundary: Regex::new(r"[.\n?!]+")?,
        })
    }

    /// `raw = 100 − 3·(words / sentences) − 2·(mean word length)`, clamped to
    /// `[10, 95]` and truncated toward zero.
    pub fn score(&self, text: &str) -> u32 {
        let sentences = self
            .sentence_boundary
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();
        let words = tokenize(text);

        if sentences == 0 || words.is_empty() {
            return NEUTRAL_READABILITY;
        }

        let word_count = words.len() as f64;
        let avg_words_per_sentence = word_count / sentences.max(1) as f64;
        let avg_word_length = words.iter().map(|w| w.len()).sum::<usize>() as f64 / word_count;

        let raw = 100.0 - avg_words_per_sentence * 3.0 - avg_word_length * 2.0;
        raw.clamp(MIN_READABILITY as f64, MAX_READABILITY as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> ReadabilityEstimator {
        ReadabilityEstimator::new().unwrap()
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(estimator().score(""), 50);
    }

    #[test]
    fn test_punctuation_only_is_neutral() {
        // Sentences exist but no tokens survive.
        assert_eq!(estimator().score("... !!! ???"), 50);
        assert_eq!(estimator().score("— — —"), 50);
    }

    #[test]
    fn test_known_value() {
        // 4 words / 1 sentence, lengths 1+6+3+4 → mean 3.5
        // 100 − 12 − 7 = 81
        assert_eq!(estimator().score("I helped the team."), 81);
    }

    #[test]
    fn test_truncates_fraction() {
        // 3 words / 2 sentences = 1.5 → 4.5; lengths 2+2+2 → 4; 100 − 4.5 − 4 = 91.5 → 91
        assert_eq!(estimator().score("ab cd. ef!"), 91);
    }

    #[test]
    fn test_clamped_to_max() {
        // 1 word / 1 sentence, length 1 → 100 − 3 − 2 = 95
        assert_eq!(estimator().score("a"), 95);
    }

    #[test]
    fn test_clamped_to_min() {
        let long_sentence = "extraordinarily ".repeat(40);
        assert_eq!(estimator().score(&long_sentence), 10);
    }

    #[test]
    fn test_repeated_terminators_count_as_one_boundary() {
        assert_eq!(estimator().score("ab cd. ef!"), estimator().score("ab cd...\n\n ef?!"));
    }

    #[test]
    fn test_always_in_range() {
        let e = estimator();
        for text in [
            "Short.",
            "One two three four five six seven eight nine ten eleven twelve.",
            "Led a team of 5 engineers.\nShipped 3 products!",
            "x",
        ] {
            let s = e.score(text);
            assert!((MIN_READABILITY..=MAX_READABILITY).contains(&s), "{text} → {s}");
        }
    }
}
