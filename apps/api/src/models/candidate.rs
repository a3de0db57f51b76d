use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Skills and CGPA recognized from one uploaded resume. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct CandidateProfile {
    /// Normalized skill set extracted from the document text.
    pub skills: BTreeSet<String>,
    /// Parsed from the document, else the form fallback, else 0.0.
    pub cgpa: f64,
}

/// One ranked recommendation for a candidate.
///
/// Field names match the recommendation payload of the processing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub company_name: String,
    pub job_role: String,
    pub min_cgpa: f64,
    pub matched_skills: BTreeSet<String>,
    /// 0–100, two-decimal precision: the share of the company's required
    /// skills the candidate covers.
    pub match_score: f64,
    /// Flag only — an under-qualified candidate still appears in results.
    pub cgpa_ok: bool,
}
