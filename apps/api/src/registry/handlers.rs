//! Axum route handlers for company and skill registration.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::company::CompanyProfile;
use crate::models::normalize;
use crate::registry::RegisterOutcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Typed registration payload. Missing required fields are rejected at
/// deserialization instead of surfacing as runtime key errors.
#[derive(Debug, Deserialize)]
pub struct RegisterCompanyRequest {
    pub name: String,
    #[serde(rename = "jobRole")]
    pub job_role: String,
    pub skills: Vec<String>,
    #[serde(rename = "minCgpa")]
    pub min_cgpa: f64,
    pub experience: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterCompanyResponse {
    pub message: String,
    pub total_companies: usize,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillsRequest {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddSkillsResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /register_company
///
/// Inserts or replaces a hiring profile, keyed by normalized name, and
/// persists the registry before responding.
pub async fn handle_register_company(
    State(state): State<AppState>,
    Json(request): Json<RegisterCompanyRequest>,
) -> Result<Json<RegisterCompanyResponse>, AppError> {
    let profile = CompanyProfile {
        name: request.name,
        job_role: request.job_role,
        skills: request.skills,
        min_cgpa: request.min_cgpa,
        experience: request.experience,
    };

    let mut registry = state.registry.lock().await;
    let outcome = registry.register_company(profile)?;
    let verb = match outcome {
        RegisterOutcome::Updated => "updated",
        RegisterOutcome::Inserted => "registered",
    };
    info!("Company {verb}, {} total", registry.companies.len());

    Ok(Json(RegisterCompanyResponse {
        message: format!("Company {verb} successfully"),
        total_companies: registry.companies.len(),
    }))
}

/// POST /add_skills
///
/// Maps each listed skill to the company and persists the mapping. The
/// recognizer's keyword set picks the new keys up immediately.
pub async fn handle_add_skills(
    State(state): State<AppState>,
    Json(request): Json<AddSkillsRequest>,
) -> Result<Json<AddSkillsResponse>, AppError> {
    let mut registry = state.registry.lock().await;
    registry.add_skills(&request.name, &request.skills)?;

    Ok(Json(AddSkillsResponse {
        message: format!(
            "Skills for {} mapped successfully.",
            normalize(&request.name)
        ),
    }))
}

/// GET /companies
///
/// All registered profiles, sorted by name ascending.
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<Vec<CompanyProfile>> {
    let registry = state.registry.lock().await;
    Json(registry.companies.sorted_by_name())
}

/// GET /skills_map
///
/// The full skill → companies mapping; an empty object when nothing has
/// been mapped (or the store was missing/corrupt at load).
pub async fn handle_skills_map(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<String>>> {
    let registry = state.registry.lock().await;
    Json(registry.skills.map().clone())
}
