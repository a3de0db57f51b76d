use std::collections::BTreeMap;

use crate::models::normalize;

/// Mapping of normalized skill → companies that declared it.
///
/// The key set doubles as the recognizer's known-keyword list, so it must
/// always reflect the latest mutation, never a snapshot taken at startup —
/// `keywords()` derives from the live map on every call.
#[derive(Debug, Default)]
pub struct SkillRegistry {
    map: BTreeMap<String, Vec<String>>,
}

impl SkillRegistry {
    /// Wraps a loaded mapping, re-normalizing keys and company lists in case
    /// the document on disk was edited by hand.
    pub fn new(map: BTreeMap<String, Vec<String>>) -> Self {
        let map = map
            .into_iter()
            .filter_map(|(skill, companies)| {
                let skill = normalize(&skill);
                if skill.is_empty() {
                    return None;
                }
                let mut normalized: Vec<String> = Vec::with_capacity(companies.len());
                for company in &companies {
                    let company = normalize(company);
                    if !company.is_empty() && !normalized.contains(&company) {
                        normalized.push(company);
                    }
                }
                Some((skill, normalized))
            })
            .collect();
        Self { map }
    }

    /// Records that `company` contributes each of `skills`. Idempotent: an
    /// existing (skill, company) pair is left untouched. Inputs are expected
    /// normalized (see `Registry::add_skills`).
    pub fn add(&mut self, company: &str, skills: &[String]) {
        for skill in skills {
            let companies = self.map.entry(skill.clone()).or_default();
            if !companies.iter().any(|existing| existing == company) {
                companies.push(company.to_string());
            }
        }
    }

    /// The known-keyword set, derived from the map keys on demand.
    pub fn keywords(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    pub fn map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.map
    }
}
