//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::cover_letter::CandidateProfile;
use crate::analysis::engine::{ensure_inputs, AnalysisReport, AnalysisRequest};
use crate::analysis::keywords::AnalysisMode;
use crate::document::{extract_text_from_document, ExtractionError};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub analysis_mode: AnalysisMode,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores pasted resume text against a job description and returns the full report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = state.engine.analyze(&request)?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart variant. Fields: `resume` (PDF file), `resume_text`, `job_text`,
/// `name`, `company`, `position`. An uploaded PDF takes precedence over pasted text.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let form = read_upload_form(multipart).await?;

    let resume_text = match form.resume_pdf {
        Some(bytes) => {
            info!(bytes = bytes.len(), "Extracting resume text from uploaded PDF");
            extract_off_thread(bytes).await?
        }
        None => form.resume_text,
    };

    let request = AnalysisRequest {
        resume_text,
        job_text: form.job_text,
        profile: form.profile,
    };
    let report = state.engine.analyze(&request)?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/optimized-resume
///
/// Returns the rewritten resume as a plain-text attachment.
pub async fn handle_download_optimized(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Response, AppError> {
    ensure_inputs(&request.resume_text, &request.job_text)?;

    let engine = &state.engine;
    let result = engine.match_keywords(&request.resume_text, &request.job_text);
    let optimized =
        engine.rewrite_resume_text(&request.resume_text, &result.matched, &result.missing);

    let filename = optimized_resume_filename(Utc::now());
    debug!(%filename, "Serving optimized resume download");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        optimized,
    )
        .into_response())
}

/// POST /api/v1/keywords
///
/// Keyword set of arbitrary text, sorted. Hosts use it to draw word clouds.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Json<KeywordsResponse> {
    Json(KeywordsResponse {
        keywords: state
            .engine
            .extract_keywords(&request.text)
            .into_iter()
            .collect(),
        analysis_mode: state.engine.mode(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct UploadForm {
    resume_pdf: Option<bytes::Bytes>,
    resume_text: String,
    job_text: String,
    profile: CandidateProfile,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::Validation(format!("Failed to read resume file: {e}"))
                    })?;
                // Browsers send an empty part when no file was chosen.
                if !bytes.is_empty() {
                    form.resume_pdf = Some(bytes);
                }
            }
            "resume_text" | "job_text" | "name" | "company" | "position" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| {
                        AppError::Validation(format!("Failed to read field '{name}': {e}"))
                    })?;
                match name.as_str() {
                    "resume_text" => form.resume_text = value,
                    "job_text" => form.job_text = value,
                    "name" => form.profile.name = Some(value),
                    "company" => form.profile.company = Some(value),
                    _ => form.profile.position = Some(value),
                }
            }
            other => debug!(field = other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}

/// PDF parsing is CPU-bound and the parser can panic on hostile input, so it
/// runs on the blocking pool; a panic is reported as an extraction failure.
async fn extract_off_thread(bytes: bytes::Bytes) -> Result<String, AppError> {
    match tokio::task::spawn_blocking(move || extract_text_from_document(&bytes)).await {
        Ok(result) => Ok(result?),
        Err(e) if e.is_panic() => {
            Err(ExtractionError::Pdf("PDF parser aborted".to_string()).into())
        }
        Err(e) => Err(AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}"))),
    }
}

/// `careerboost_optimized_<UTC %Y%m%d_%H%M%S>.txt`
pub fn optimized_resume_filename(now: DateTime<Utc>) -> String {
    format!("careerboost_optimized_{}.txt", now.format("%Y%m%d_%H%M%S"))
}
