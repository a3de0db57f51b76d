//! Whole-document JSON persistence for the company and skill registries.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::warn;

use crate::models::company::CompanyProfile;

pub const COMPANIES_FILE: &str = "companies.json";
pub const SKILLS_FILE: &str = "skills.json";

/// Flat-file JSON store rooted at the configured data directory.
///
/// Reads degrade to the empty value when a document is missing or corrupt.
/// Writes replace the whole document through a temp file in the same
/// directory plus a rename, so a crash mid-write never leaves a half-written
/// store behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads the full company list, re-normalizing every profile.
    pub fn load_companies(&self) -> Vec<CompanyProfile> {
        let profiles: Vec<CompanyProfile> = self.read_or_default(COMPANIES_FILE);
        profiles.into_iter().map(CompanyProfile::normalized).collect()
    }

    pub fn save_companies(&self, companies: &[CompanyProfile]) -> Result<()> {
        self.write(COMPANIES_FILE, &companies)
    }

    /// Loads the full skill → companies mapping.
    pub fn load_skills(&self) -> BTreeMap<String, Vec<String>> {
        self.read_or_default(SKILLS_FILE)
    }

    pub fn save_skills(&self, map: &BTreeMap<String, Vec<String>>) -> Result<()> {
        self.write(SKILLS_FILE, map)
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return T::default();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring corrupt document {}: {e}", path.display());
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.data_dir.join(file);
        let tmp = NamedTempFile::new_in(&self.data_dir).with_context(|| {
            format!("Failed to create temp file in {}", self.data_dir.display())
        })?;
        serde_json::to_writer_pretty(tmp.as_file(), value)
            .with_context(|| format!("Failed to serialize {file}"))?;
        tmp.persist(&path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}
