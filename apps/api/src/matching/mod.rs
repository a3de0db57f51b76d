//! Company matching and ranking over a candidate's recognized skills.

pub mod handlers;

use std::collections::BTreeSet;

use crate::models::candidate::{CandidateProfile, MatchResult};
use crate::models::company::CompanyProfile;
use crate::models::normalize;

/// Scores every company against the candidate and returns the surviving
/// matches ranked by score, descending.
///
/// The score measures coverage of the COMPANY's required skills, not the
/// candidate's: a company asking for two skills and matched on both scores
/// 100 regardless of what else the candidate knows. That asymmetry is
/// load-bearing for the ranking semantics.
///
/// Companies with no required skills are skipped (no meaningful ratio), as
/// are companies with no overlap at all. The CGPA threshold never filters —
/// under-qualified candidates appear with `cgpa_ok: false`.
///
/// Ties keep registration order: the sort is stable and the input order is
/// the registry order.
pub fn match_companies(
    candidate: &CandidateProfile,
    companies: &[CompanyProfile],
) -> Vec<MatchResult> {
    let candidate_skills: BTreeSet<String> =
        candidate.skills.iter().map(|s| normalize(s)).collect();

    let mut results = Vec::new();
    for company in companies {
        let company_skills: BTreeSet<&str> =
            company.skills.iter().map(String::as_str).collect();
        if company_skills.is_empty() {
            continue;
        }

        let matched: BTreeSet<String> = candidate_skills
            .iter()
            .filter(|skill| company_skills.contains(skill.as_str()))
            .cloned()
            .collect();
        if matched.is_empty() {
            continue;
        }

        let ratio = matched.len() as f64 / company_skills.len() as f64;
        results.push(MatchResult {
            company_name: company.name.clone(),
            job_role: company.job_role.clone(),
            min_cgpa: company.min_cgpa,
            match_score: round2(ratio * 100.0),
            cgpa_ok: candidate.cgpa >= company.min_cgpa,
            matched_skills: matched,
        });
    }

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, skills: &[&str], min_cgpa: f64) -> CompanyProfile {
        CompanyProfile {
            name: name.to_string(),
            job_role: "Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            min_cgpa,
            experience: String::new(),
        }
    }

    fn candidate(skills: &[&str], cgpa: f64) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            cgpa,
        }
    }

    #[test]
    fn test_half_coverage_scores_fifty() {
        let companies = vec![company("acme", &["python", "sql"], 3.0)];
        let results = match_companies(&candidate(&["python"], 3.5), &companies);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_score, 50.0);
        assert!(results[0].cgpa_ok);
        assert_eq!(
            results[0].matched_skills.iter().collect::<Vec<_>>(),
            vec!["python"]
        );
    }

    #[test]
    fn test_score_covers_company_requirements_not_candidate_breadth() {
        // Candidate knows far more than asked; full coverage still scores 100.
        let companies = vec![company("acme", &["python", "sql"], 0.0)];
        let results = match_companies(
            &candidate(&["python", "sql", "rust", "go", "kubernetes"], 4.0),
            &companies,
        );
        assert_eq!(results[0].match_score, 100.0);
    }

    #[test]
    fn test_companies_without_overlap_never_appear() {
        let companies = vec![
            company("acme", &["python"], 0.0),
            company("globex", &["cobol"], 0.0),
        ];
        let results = match_companies(&candidate(&["python"], 3.0), &companies);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].company_name, "acme");
    }

    #[test]
    fn test_companies_with_empty_skills_are_skipped() {
        let companies = vec![company("acme", &[], 0.0)];
        let results = match_companies(&candidate(&["python"], 3.0), &companies);
        assert!(results.is_empty());
    }

    #[test]
    fn test_low_cgpa_flags_but_does_not_filter() {
        let companies = vec![company("acme", &["python"], 3.5)];
        let results = match_companies(&candidate(&["python"], 2.0), &companies);
        assert_eq!(results.len(), 1);
        assert!(!results[0].cgpa_ok);
    }

    #[test]
    fn test_results_sorted_by_score_descending() {
        let companies = vec![
            company("partial", &["python", "sql", "rust"], 0.0),
            company("full", &["python"], 0.0),
        ];
        let results = match_companies(&candidate(&["python"], 3.0), &companies);
        assert_eq!(results[0].company_name, "full");
        assert_eq!(results[1].company_name, "partial");
    }

    #[test]
    fn test_equal_scores_keep_registration_order() {
        let companies = vec![
            company("first", &["python"], 0.0),
            company("second", &["python"], 0.0),
            company("third", &["python"], 0.0),
        ];
        let results = match_companies(&candidate(&["python"], 3.0), &companies);
        let names: Vec<&str> = results.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_scores_are_rounded_to_two_decimals() {
        let companies = vec![company("acme", &["a", "b", "c"], 0.0)];
        let results = match_companies(&candidate(&["a"], 3.0), &companies);
        // 100 / 3 = 33.333... → 33.33
        assert_eq!(results[0].match_score, 33.33);
    }

    #[test]
    fn test_scores_stay_within_bounds() {
        let companies = vec![
            company("one", &["a"], 0.0),
            company("many", &["a", "b", "c", "d", "e", "f", "g"], 0.0),
        ];
        let results = match_companies(&candidate(&["a"], 3.0), &companies);
        for result in results {
            assert!(result.match_score > 0.0 && result.match_score <= 100.0);
        }
    }

    #[test]
    fn test_candidate_skills_are_normalized_before_matching() {
        let companies = vec![company("acme", &["python"], 0.0)];
        let results = match_companies(&candidate(&["  PyThOn  "], 3.0), &companies);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_score, 100.0);
    }

    #[test]
    fn test_empty_candidate_skill_set_yields_no_results() {
        let companies = vec![company("acme", &["python"], 0.0)];
        assert!(match_companies(&candidate(&[], 4.0), &companies).is_empty());
    }

    #[test]
    fn test_empty_company_list_yields_no_results() {
        assert!(match_companies(&candidate(&["python"], 4.0), &[]).is_empty());
    }
}
