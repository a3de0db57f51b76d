//! Explicitly owned registry state: companies, skills, and their persistence.

pub mod companies;
pub mod handlers;
pub mod skills;

pub use companies::{CompanyRegistry, RegisterOutcome};
pub use skills::SkillRegistry;

use crate::errors::AppError;
use crate::models::company::{normalize_skills, CompanyProfile};
use crate::models::normalize;
use crate::store::JsonStore;

/// Process-wide registry state, loaded from the JSON store at startup and
/// persisted back after every mutation.
///
/// Held behind a single async mutex in `AppState`; every mutation and its
/// persistence run inside one lock scope, which is the single-writer
/// discipline this service promises.
pub struct Registry {
    pub companies: CompanyRegistry,
    pub skills: SkillRegistry,
    store: JsonStore,
}

impl Registry {
    /// Loads both documents wholesale. Missing or corrupt documents degrade
    /// to empty registries, never to a startup failure.
    pub fn load(store: JsonStore) -> Self {
        let companies = CompanyRegistry::new(store.load_companies());
        let skills = SkillRegistry::new(store.load_skills());
        Self {
            companies,
            skills,
            store,
        }
    }

    /// Registers (or replaces) a company profile and persists the whole
    /// company list. Validation failures leave memory and disk untouched.
    pub fn register_company(
        &mut self,
        profile: CompanyProfile,
    ) -> Result<RegisterOutcome, AppError> {
        let profile = profile.normalized();
        if profile.name.is_empty() {
            return Err(AppError::Validation(
                "Company name must not be empty".to_string(),
            ));
        }
        if !profile.min_cgpa.is_finite() || profile.min_cgpa < 0.0 {
            return Err(AppError::Validation(
                "minCgpa must be a non-negative number".to_string(),
            ));
        }

        let outcome = self.companies.register(profile);
        self.store
            .save_companies(self.companies.all())
            .map_err(|e| AppError::Store(format!("Failed to persist companies: {e}")))?;
        Ok(outcome)
    }

    /// Maps each skill to `company` and persists the whole mapping. The
    /// recognizer's keyword set derives from the mapping's keys, so it picks
    /// this mutation up immediately.
    pub fn add_skills(&mut self, company: &str, skills: &[String]) -> Result<(), AppError> {
        let company = normalize(company);
        let skills = normalize_skills(skills);
        if company.is_empty() || skills.is_empty() {
            return Err(AppError::Validation(
                "Missing company name or skills list".to_string(),
            ));
        }

        self.skills.add(&company, &skills);
        self.store
            .save_skills(self.skills.map())
            .map_err(|e| AppError::Store(format!("Failed to persist skills: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> (tempfile::TempDir, Registry) {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::load(JsonStore::new(dir.path()));
        (dir, registry)
    }

    fn profile(name: &str, skills: &[&str], min_cgpa: f64) -> CompanyProfile {
        CompanyProfile {
            name: name.to_string(),
            job_role: "Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            min_cgpa,
            experience: String::new(),
        }
    }

    #[test]
    fn test_register_persists_and_reloads() {
        let (dir, mut registry) = registry();
        registry
            .register_company(profile("Acme", &["Python"], 3.0))
            .unwrap();

        let reloaded = Registry::load(JsonStore::new(dir.path()));
        assert_eq!(reloaded.companies.len(), 1);
        assert_eq!(reloaded.companies.all()[0].name, "acme");
        assert_eq!(reloaded.companies.all()[0].skills, vec!["python"]);
    }

    #[test]
    fn test_register_rejects_blank_name_without_mutating() {
        let (_dir, mut registry) = registry();
        let err = registry
            .register_company(profile("   ", &["python"], 3.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(registry.companies.len(), 0);
    }

    #[test]
    fn test_register_rejects_negative_threshold() {
        let (_dir, mut registry) = registry();
        let err = registry
            .register_company(profile("acme", &["python"], -1.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_add_skills_persists_and_refreshes_keywords() {
        let (dir, mut registry) = registry();
        registry
            .add_skills("Acme", &["Rust".to_string(), "SQL".to_string()])
            .unwrap();
        assert_eq!(registry.skills.keywords(), vec!["rust", "sql"]);

        let reloaded = Registry::load(JsonStore::new(dir.path()));
        assert_eq!(reloaded.skills.keywords(), vec!["rust", "sql"]);
        assert_eq!(reloaded.skills.map()["rust"], vec!["acme"]);
    }

    #[test]
    fn test_add_skills_rejects_empty_inputs() {
        let (_dir, mut registry) = registry();
        assert!(registry.add_skills("", &["rust".to_string()]).is_err());
        assert!(registry.add_skills("acme", &[]).is_err());
        // Skills that normalize away entirely count as an empty list.
        assert!(registry.add_skills("acme", &["   ".to_string()]).is_err());
    }
}
