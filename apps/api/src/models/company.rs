use serde::{Deserialize, Serialize};

use crate::models::normalize;

/// A company's hiring profile.
///
/// Serialized field names match the persisted `companies.json` document and
/// the listing endpoint: `name`, `jobRole`, `skills`, `min_cgpa`,
/// `experience`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Case-insensitive identity key, stored normalized.
    pub name: String,
    #[serde(rename = "jobRole")]
    pub job_role: String,
    /// Normalized, de-duplicated required skills. May be empty.
    #[serde(default)]
    pub skills: Vec<String>,
    pub min_cgpa: f64,
    /// Free text, unvalidated.
    #[serde(default)]
    pub experience: String,
}

impl CompanyProfile {
    /// Re-applies name and skill normalization.
    ///
    /// Documents are normalized on write, but a hand-edited store must come
    /// out normalized on load as well.
    pub fn normalized(mut self) -> Self {
        self.name = normalize(&self.name);
        self.skills = normalize_skills(&self.skills);
        self
    }
}

/// Trims, lowercases, and de-duplicates a skill list.
///
/// First-seen order is preserved; entries that normalize to the empty string
/// are dropped.
pub fn normalize_skills(raw: &[String]) -> Vec<String> {
    let mut skills: Vec<String> = Vec::with_capacity(raw.len());
    for skill in raw {
        let skill = normalize(skill);
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, skills: &[&str]) -> CompanyProfile {
        CompanyProfile {
            name: name.to_string(),
            job_role: "Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            min_cgpa: 3.0,
            experience: "0-2 years".to_string(),
        }
    }

    #[test]
    fn test_normalized_lowercases_name_and_skills() {
        let normalized = profile(" Acme ", &["  Python", "SQL "]).normalized();
        assert_eq!(normalized.name, "acme");
        assert_eq!(normalized.skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_normalize_skills_drops_duplicates_and_blanks() {
        let raw = vec![
            "Python".to_string(),
            " python ".to_string(),
            "   ".to_string(),
            "sql".to_string(),
        ];
        assert_eq!(normalize_skills(&raw), vec!["python", "sql"]);
    }

    #[test]
    fn test_serde_uses_store_field_names() {
        let json = serde_json::to_value(profile("acme", &["python"])).unwrap();
        assert!(json.get("jobRole").is_some());
        assert!(json.get("min_cgpa").is_some());
        assert!(json.get("job_role").is_none());
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let parsed: CompanyProfile =
            serde_json::from_str(r#"{"name":"acme","jobRole":"SRE","min_cgpa":2.5}"#).unwrap();
        assert!(parsed.skills.is_empty());
        assert!(parsed.experience.is_empty());
    }
}
