//! Skill and CGPA recognition over extracted resume text.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

/// Matches a declared grade like `CGPA: 8.75` or `gpa 3.50`.
static CGPA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:CGPA|GPA)[:\s]*([0-9]+\.[0-9]+)").expect("CGPA pattern compiles")
});

/// Pluggable skill recognizer — implement this to swap the detection backend
/// (e.g. tokenized or stemmed matching) without touching the endpoint or
/// handler code.
///
/// Carried in `AppState` as `Arc<dyn SkillRecognizer>`.
#[async_trait]
pub trait SkillRecognizer: Send + Sync {
    /// Returns the subset of `known_skills` present in `text`. Both sides
    /// are expected normalized (the keyword list comes from the skill
    /// registry's key set).
    async fn recognize(&self, text: &str, known_skills: &[String]) -> BTreeSet<String>;
}

/// Default recognizer: case-insensitive substring containment against the
/// known keyword set.
///
/// Intentionally crude. No word boundaries, no stemming — a short keyword
/// like "go" matches inside "algorithms". That false-positive surface is the
/// documented contract of this backend, not a bug to fix here.
pub struct SubstringRecognizer;

#[async_trait]
impl SkillRecognizer for SubstringRecognizer {
    async fn recognize(&self, text: &str, known_skills: &[String]) -> BTreeSet<String> {
        recognize_substrings(text, known_skills)
    }
}

fn recognize_substrings(text: &str, known_skills: &[String]) -> BTreeSet<String> {
    let haystack = text.to_lowercase();
    known_skills
        .iter()
        .filter(|skill| !skill.is_empty() && haystack.contains(skill.as_str()))
        .cloned()
        .collect()
}

/// First declared CGPA/GPA in the text, if any.
///
/// One pattern scan, first match wins. No scale validation — a 10-point
/// 8.75 and a 4-point 3.8 both pass through untouched.
pub fn extract_cgpa(text: &str) -> Option<f64> {
    CGPA_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
