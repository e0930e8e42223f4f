//! Axum route handlers for candidate submission and ranking.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{self, truncate_chars};
use crate::models::candidate::{CandidateProfile, CandidateRecord, ExtractionHints};
use crate::models::requirements::JobRequirements;
use crate::scoring;
use crate::state::AppState;

/// How much of the submitted text is kept on the stored record.
const STORED_TEXT_CHARS: usize = 2000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub name: Option<String>,
    // Accepted for API symmetry with the PDF form but not used as a hint;
    // the extractor detects email from the text itself.
    #[serde(default)]
    #[allow(dead_code)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub assessment_score: Option<f64>,
    #[serde(default)]
    pub job_requirements: Option<JobRequirements>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub id: Uuid,
    pub score: u32,
    pub extracted: CandidateProfile,
}

/// Flat top-N row shaped for downstream LMS import.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score: u32,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation(
            "text required (resume or cover letter)".to_string(),
        ));
    }

    let hints = ExtractionHints {
        name: req.name,
        assessment_score: req.assessment_score,
    };
    let response = submit(
        &state,
        &req.text,
        req.phone.as_deref().unwrap_or_default(),
        &hints,
        req.job_requirements.unwrap_or_default(),
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/upload_pdf (multipart: `file` = PDF bytes, plus optional text
/// fields `name`, `email`, `phone`, `assessment_score`, `job_requirements`)
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut pdf: Option<Vec<u8>> = None;
    let mut name: Option<String> = None;
    let mut phone = String::new();
    let mut assessment_score: Option<f64> = None;
    let mut job_requirements = JobRequirements::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read file field: {e}")))?;
                pdf = Some(bytes.to_vec());
            }
            "name" => name = Some(read_text_field(field).await?),
            "phone" => phone = read_text_field(field).await?,
            "assessment_score" => {
                assessment_score = read_text_field(field).await?.trim().parse::<f64>().ok();
            }
            "job_requirements" => {
                let raw = read_text_field(field).await?;
                job_requirements = serde_json::from_str(&raw).map_err(|e| {
                    AppError::Validation(format!("job_requirements is not valid JSON: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let Some(pdf) = pdf else {
        return Err(AppError::Validation("file required (PDF)".to_string()));
    };

    let text = pdf_extract::extract_text_from_mem(&pdf)
        .map_err(|e| AppError::UnprocessableEntity(format!("could not extract text from PDF: {e}")))?;

    let hints = ExtractionHints {
        name,
        assessment_score,
    };
    let response = submit(&state, &text, &phone, &hints, job_requirements).await?;
    Ok(Json(response))
}

/// GET /api/ranked
pub async fn handle_ranked(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    Ok(Json(state.store.ranked().await))
}

/// GET /api/export_top/:n
pub async fn handle_export_top(
    State(state): State<AppState>,
    Path(n): Path<usize>,
) -> Result<Json<Vec<ExportRow>>, AppError> {
    let n = n.max(1);
    let rows = state
        .store
        .ranked()
        .await
        .into_iter()
        .take(n)
        .map(|r| ExportRow {
            id: r.id,
            name: r.extracted.name,
            email: r.extracted.email,
            phone: r.extracted.phone,
            score: r.score,
            summary: r.extracted.summary,
        })
        .collect();
    Ok(Json(rows))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one submission through extract → score → persist. Extraction never
/// fails; a degraded oracle call still records the candidate with a
/// low-information profile.
async fn submit(
    state: &AppState,
    text: &str,
    known_phone: &str,
    hints: &ExtractionHints,
    requirements: JobRequirements,
) -> Result<UploadResponse, AppError> {
    let extracted = extraction::extract(text, known_phone, hints, state.oracle.as_ref()).await;
    let score = scoring::score(&extracted, &requirements);

    let record = CandidateRecord {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        raw_text: truncate_chars(text, STORED_TEXT_CHARS),
        extracted,
        score,
    };
    state
        .store
        .append(record.clone())
        .await
        .map_err(AppError::Internal)?;

    info!(id = %record.id, score, "candidate recorded");

    Ok(UploadResponse {
        ok: true,
        id: record.id,
        score,
        extracted: record.extracted,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read multipart field: {e}")))
}
