// Text analysis engine
// Implements: tokenization, keyword extraction, matching, readability, composite
// scoring, weak-verb advice, rule-based rewriting and cover letter generation.
// Nothing here does I/O; document extraction lives in crate::document.

pub mod action_words;
pub mod cover_letter;
pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
pub mod linguistic;
pub mod matcher;
pub mod readability;
pub mod rewriter;
pub mod scoring;
pub mod tokenizer;
