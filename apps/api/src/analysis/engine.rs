//! Analysis engine — orchestrates one resume-vs-job analysis.
//!
//! Flow: validate input → match_keywords → readability_score → overall_score →
//!       suggest_action_words → rewrite_resume_text → generate_cover_letter.
//!
//! The engine holds no mutable state; the extraction strategy is injected once
//! at startup and shared read-only across requests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::analysis::action_words::{suggest_action_words, SuggestionMap};
use crate::analysis::cover_letter::{generate_cover_letter, CandidateProfile};
use crate::analysis::keywords::{AnalysisMode, KeywordExtractor, KeywordSet};
use crate::analysis::matcher::{match_keywords, MatchResult};
use crate::analysis::readability::ReadabilityEstimator;
use crate::analysis::rewriter::ResumeRewriter;
use crate::analysis::scoring::overall_score;

/// Missing keywords surfaced as the skill gap.
pub const SKILL_GAP_LIMIT: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Please provide both a resume and a job description.")]
    MissingInput { resume: bool, job: bool },
}

// ────────────────────────────────────────────────────────────────────────────
// Request / report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_text: String,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

/// Full result of one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analysis_mode: AnalysisMode,
    pub overall_score: u32,
    pub keyword_score: u32,
    pub readability_score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub missing_count: usize,
    /// First `SKILL_GAP_LIMIT` missing keywords.
    pub skill_gap: Vec<String>,
    pub suggestions: SuggestionMap,
    pub optimized_resume: String,
    pub cover_letter: String,
    /// All job keywords, sorted — for hosts that render word clouds.
    pub job_keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

pub struct AnalysisEngine {
    extractor: Arc<dyn KeywordExtractor>,
    readability: ReadabilityEstimator,
    rewriter: ResumeRewriter,
}

impl AnalysisEngine {
    pub fn new(extractor: Arc<dyn KeywordExtractor>) -> Result<Self, regex::Error> {
        Ok(Self {
            extractor,
            readability: ReadabilityEstimator::new()?,
            rewriter: ResumeRewriter::new()?,
        })
    }

    pub fn mode(&self) -> AnalysisMode {
        self.extractor.mode()
    }

    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        self.extractor.extract_keywords(text)
    }

    pub fn match_keywords(&self, resume_text: &str, job_text: &str) -> MatchResult {
        match_keywords(self.extractor.as_ref(), resume_text, job_text)
    }

    pub fn readability_score(&self, text: &str) -> u32 {
        self.readability.score(text)
    }

    pub fn suggest_action_words(&self, text: &str) -> SuggestionMap {
        suggest_action_words(self.extractor.as_ref(), text)
    }

    pub fn rewrite_resume_text(
        &self,
        resume_text: &str,
        matched_keywords: &[String],
        missing_keywords: &[String],
    ) -> String {
        self.rewriter
            .rewrite(resume_text, matched_keywords, missing_keywords)
    }

    /// Runs the whole pipeline. Fails only when either text is blank.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        ensure_inputs(&request.resume_text, &request.job_text)?;

        let analysis_id = Uuid::new_v4();
        let span = info_span!("analysis", %analysis_id, mode = %self.mode());
        let _guard = span.enter();

        let resume_text = request.resume_text.as_str();
        let job_text = request.job_text.as_str();

        let MatchResult {
            score: keyword_score,
            matched,
            missing,
        } = self.match_keywords(resume_text, job_text);
        debug!(
            keyword_score,
            matched = matched.len(),
            missing = missing.len(),
            "Keyword match computed"
        );

        let readability_score = self.readability_score(resume_text);
        let overall = overall_score(keyword_score, readability_score);
        let suggestions = self.suggest_action_words(resume_text);
        let optimized_resume = self.rewrite_resume_text(resume_text, &matched, &missing);
        let cover_letter = generate_cover_letter(&request.profile, &matched);
        let job_keywords: Vec<String> = self.extract_keywords(job_text).into_iter().collect();

        info!(
            overall_score = overall,
            keyword_score,
            readability_score,
            weak_verbs = suggestions.len(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            analysis_id,
            analysis_mode: self.mode(),
            overall_score: overall,
            keyword_score,
            readability_score,
            missing_count: missing.len(),
            skill_gap: missing.iter().take(SKILL_GAP_LIMIT).cloned().collect(),
            matched,
            missing,
            suggestions,
            optimized_resume,
            cover_letter,
            job_keywords,
        })
    }
}

/// Both texts must be non-blank before any scoring runs.
pub fn ensure_inputs(resume_text: &str, job_text: &str) -> Result<(), AnalysisError> {
    let resume = resume_text.trim().is_empty();
    let job = job_text.trim().is_empty();
    if resume || job {
        return Err(AnalysisError::MissingInput { resume, job });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::{FallbackExtractor, LinguisticExtractor};

    fn engine(extractor: Arc<dyn KeywordExtractor>) -> AnalysisEngine {
        AnalysisEngine::new(extractor).unwrap()
    }

    fn request(resume: &str, job: &str) -> AnalysisRequest {
        AnalysisRequest {
            resume_text: resume.to_string(),
            job_text: job.to_string(),
            profile: CandidateProfile::default(),
        }
    }

    #[test]
    fn test_analyze_fallback_scenario() {
        let report = engine(Arc::new(FallbackExtractor))
            .analyze(&request("I helped the team.", "helped required."))
            .unwrap();
        assert_eq!(report.analysis_mode, AnalysisMode::Fallback);
        assert_eq!(report.keyword_score, 50);
        assert_eq!(report.matched, vec!["helped"]);
        assert_eq!(report.missing, vec!["required"]);
        assert_eq!(report.missing_count, 1);
        assert_eq!(report.readability_score, 81);
        // 35 + 24.3 → 59
        assert_eq!(report.overall_score, 59);
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(
            report.optimized_resume,
            "Suggested skills to add: required\n\nI collaborated with/assisted in the team."
        );
        assert!(report.cover_letter.contains("worked with helped"));
        assert_eq!(report.job_keywords, vec!["helped", "required"]);
    }

    #[test]
    fn test_analyze_rejects_blank_resume() {
        let err = engine(Arc::new(FallbackExtractor))
            .analyze(&request("   ", "Rust engineer"))
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MissingInput {
                resume: true,
                job: false
            }
        );
    }

    #[test]
    fn test_analyze_rejects_blank_job() {
        let err = engine(Arc::new(LinguisticExtractor))
            .analyze(&request("Rust engineer", ""))
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MissingInput {
                resume: false,
                job: true
            }
        );
        assert_eq!(
            err.to_string(),
            "Please provide both a resume and a job description."
        );
    }

    #[test]
    fn test_skill_gap_is_capped() {
        let job: String = (0..30).map(|i| format!("tool{i:02} ")).collect();
        let report = engine(Arc::new(FallbackExtractor))
            .analyze(&request("nothing relevant", &job))
            .unwrap();
        assert_eq!(report.missing_count, 30);
        assert_eq!(report.skill_gap.len(), SKILL_GAP_LIMIT);
        assert_eq!(report.skill_gap[0], "tool00");
    }

    #[test]
    fn test_linguistic_mode_matches_inflections() {
        let report = engine(Arc::new(LinguisticExtractor))
            .analyze(&request(
                "Deployed services on Kubernetes clusters.",
                "You will deploy a service to a Kubernetes cluster.",
            ))
            .unwrap();
        assert_eq!(report.analysis_mode, AnalysisMode::Linguistic);
        assert_eq!(report.keyword_score, 100);
        assert!(report.missing.is_empty());
        assert_eq!(report.matched.len(), 4);
        assert!(report.matched.contains(&"kubernetes".to_string()));
        assert!(report.matched.contains(&"deploy".to_string()));
    }

    #[test]
    fn test_each_analysis_gets_fresh_id() {
        let e = engine(Arc::new(FallbackExtractor));
        let r = request("Rust", "Rust");
        assert_ne!(e.analyze(&r).unwrap().analysis_id, e.analyze(&r).unwrap().analysis_id);
    }

    #[test]
    fn test_ensure_inputs_accepts_non_blank() {
        assert!(ensure_inputs("a", "b").is_ok());
    }
}
