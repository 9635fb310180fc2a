//! Keyword matching — overlap between resume and job keyword sets plus a percentage score.

use crate::analysis::keywords::KeywordExtractor;

/// Outcome of comparing resume keywords against job keywords.
///
/// `matched` and `missing` are disjoint, sorted ascending, and together cover
/// every job keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Scores `resume_text` against `job_text`:
/// `score = floor(100 * |matched| / max(1, |job keywords|))`.
pub fn match_keywords(
    extractor: &dyn KeywordExtractor,
    resume_text: &str,
    job_text: &str,
) -> MatchResult {
    let resume_kw = extractor.extract_keywords(resume_text);
    let job_kw = extractor.extract_keywords(job_text);

    // BTreeSet iteration is already lexicographic.
    let matched: Vec<String> = job_kw.intersection(&resume_kw).cloned().collect();
    let missing: Vec<String> = job_kw.difference(&resume_kw).cloned().collect();

    let score = (100 * matched.len() / job_kw.len().max(1)) as u32;

    MatchResult {
        score,
        matched,
        missing,
    }
}
