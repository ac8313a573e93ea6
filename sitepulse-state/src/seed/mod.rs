//! Initial record collections for a [`SiteState`](crate::SiteState).

mod mock;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Equipment, Project, QualityIssue, SafetyAlert};
use crate::error::SeedError;

/// The four leaf collections, as loaded at startup.
///
/// Missing collections in a JSON seed default to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seed {
    pub projects: Vec<Project>,
    pub safety_alerts: Vec<SafetyAlert>,
    pub quality_issues: Vec<QualityIssue>,
    pub equipment: Vec<Equipment>,
}

impl Seed {
    /// Built-in demo records: three of each kind.
    pub fn mock() -> Self {
        Self {
            projects: mock::projects(),
            safety_alerts: mock::safety_alerts(),
            quality_issues: mock::quality_issues(),
            equipment: mock::equipment(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reads and validates a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), "loaded seed file");
        Ok(seed)
    }

    /// Checks numeric ranges and id uniqueness within each collection.
    pub fn validate(&self) -> Result<(), SeedError> {
        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids("safety alert", self.safety_alerts.iter().map(|a| a.id.as_str()))?;
        unique_ids("quality issue", self.quality_issues.iter().map(|i| i.id.as_str()))?;
        unique_ids("equipment", self.equipment.iter().map(|e| e.id.as_str()))?;

        for p in &self.projects {
            let check = Check::new("project", p.id.as_str());
            check.percentage("progress", p.progress)?;
            check.non_negative("budget", p.budget)?;
            check.non_negative("spent", p.spent)?;
        }
        for i in &self.quality_issues {
            Check::new("quality issue", i.id.as_str()).percentage("confidence", i.confidence)?;
        }
        for e in &self.equipment {
            let check = Check::new("equipment", e.id.as_str());
            check.percentage("health", e.health)?;
            check.percentage("efficiency", e.efficiency)?;
        }
        Ok(())
    }
}

fn unique_ids<'a>(
    record: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                record,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

struct Check<'a> {
    record: &'static str,
    id: &'a str,
}

impl<'a> Check<'a> {
    fn new(record: &'static str, id: &'a str) -> Self {
        Self { record, id }
    }

    fn percentage(&self, field: &'static str, value: f64) -> Result<(), SeedError> {
        self.within(field, value, (0.0..=100.0).contains(&value))
    }

    fn non_negative(&self, field: &'static str, value: f64) -> Result<(), SeedError> {
        self.within(field, value, value.is_finite() && value >= 0.0)
    }

    fn within(&self, field: &'static str, value: f64, ok: bool) -> Result<(), SeedError> {
        if ok {
            Ok(())
        } else {
            Err(SeedError::OutOfRange {
                record: self.record,
                id: self.id.to_string(),
                field,
                value,
            })
        }
    }
}
