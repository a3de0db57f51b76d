//! Axum route handler for the resume processing endpoint.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{self, DocumentKind};
use crate::matching::match_companies;
use crate::models::candidate::{CandidateProfile, MatchResult};
use crate::recognition::extract_cgpa;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResumeResponse {
    pub recommendations: Vec<MatchResult>,
    pub message: String,
}

/// POST /process_resume
///
/// Multipart form: `name` (text), `cgpa` (optional numeric fallback), and
/// `resume` (a `.pdf` or `.docx` file). The upload is persisted under a
/// sanitized filename, its text extracted, skills and CGPA recognized
/// against the latest keyword set, and the current company registry matched
/// against the result.
pub async fn handle_process_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResumeResponse>, AppError> {
    let mut student_name = String::new();
    let mut fallback_cgpa: Option<String> = None;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => student_name = read_text_field(field).await?,
            "cgpa" => fallback_cgpa = Some(read_text_field(field).await?),
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?;
                upload = Some((filename, data));
            }
            _ => {}
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Invalid or missing file".to_string()))?;
    if DocumentKind::from_filename(&filename).is_none() {
        return Err(AppError::Validation("Invalid or missing file".to_string()));
    }

    save_upload(&state, &filename, &data).await?;

    let text = extraction::extract_text(&filename, &data)?;

    // Snapshot both registries under one lock, then release it before the
    // recognition pass. Matching is deterministic for this snapshot.
    let (keywords, companies) = {
        let registry = state.registry.lock().await;
        (
            registry.skills.keywords(),
            registry.companies.all().to_vec(),
        )
    };

    let skills = state.recognizer.recognize(&text, &keywords).await;
    let cgpa = match extract_cgpa(&text) {
        Some(declared) => declared,
        None => parse_fallback_cgpa(fallback_cgpa.as_deref())?,
    };

    let candidate = CandidateProfile { skills, cgpa };
    let recommendations = match_companies(&candidate, &companies);
    info!(
        "Matched {} of {} companies for '{}'",
        recommendations.len(),
        companies.len(),
        filename
    );

    Ok(Json(ProcessResumeResponse {
        recommendations,
        message: format!("Resume processed successfully for {student_name}"),
    }))
}

async fn read_text_field(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}

/// The CGPA declared in the document takes precedence; the form value is a
/// fallback; 0.0 when neither is present.
fn parse_fallback_cgpa(raw: Option<&str>) -> Result<f64, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Validation(format!("cgpa must be numeric, got '{raw}'"))),
        None => Ok(0.0),
    }
}

async fn save_upload(state: &AppState, filename: &str, data: &[u8]) -> Result<(), AppError> {
    let path = state
        .config
        .upload_dir
        .join(extraction::sanitize_filename(filename));
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::Store(format!("Failed to save upload {}: {e}", path.display())))
}
