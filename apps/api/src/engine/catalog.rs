//! Career Catalog — static, read-only career definitions loaded once at startup.
//!
//! Every entry is validated on load so that scoring never divides by an empty
//! skill or interest set. Iteration order is definition order and doubles as
//! the tie-break order when ranking.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

const BUILTIN_CATALOG: &str = include_str!("../../catalog/careers.json");

/// One career the engine can recommend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerDefinition {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub required_skills: Vec<String>,
    /// Soft strengths the role leans on. Informational, not scored.
    #[serde(default)]
    pub core_strengths: Vec<String>,
    pub related_interests: Vec<String>,
    pub growth_score: f64,
    pub stability_score: f64,
    pub market_demand: f64,
    pub risk_level: f64,
    #[serde(default)]
    pub average_salary_lpa: Option<f64>,
    #[serde(default)]
    pub learning_paths: BTreeMap<String, String>,
    #[serde(default)]
    pub future_scope: String,
    #[serde(default)]
    pub work_style: String,
    #[serde(default)]
    pub industry_trend: String,
}

impl CareerDefinition {
    /// Guidance text for a skill. Keys are matched case-insensitively.
    pub fn learning_path(&self, skill: &str) -> Option<&str> {
        self.learning_paths
            .get(skill)
            .or_else(|| {
                let wanted = skill.to_lowercase();
                self.learning_paths
                    .iter()
                    .find(|(key, _)| key.to_lowercase() == wanted)
                    .map(|(_, path)| path)
            })
            .map(String::as_str)
    }
}

/// Immutable set of career definitions. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<CareerDefinition>,
}

impl CareerCatalog {
    /// Validates and freezes a list of definitions.
    ///
    /// Rejects entries with an empty name, empty `required_skills` or
    /// `related_interests`, numeric fields outside [0, 10], a negative salary,
    /// or a name already used by an earlier entry. Duplicate skill and
    /// interest tokens within an entry collapse, keeping first occurrence.
    pub fn new(careers: Vec<CareerDefinition>) -> Result<Self, EngineError> {
        let mut seen_names = HashSet::new();
        let mut validated = Vec::with_capacity(careers.len());

        for mut career in careers {
            career.required_skills = dedup_in_order(career.required_skills);
            career.related_interests = dedup_in_order(career.related_interests);
            validate_entry(&career)?;

            if !seen_names.insert(career.name.clone()) {
                return Err(invalid(&career.name, "duplicate career name"));
            }
            validated.push(career);
        }

        Ok(Self { careers: validated })
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let careers: Vec<CareerDefinition> = serde_json::from_str(json)?;
        Self::new(careers)
    }

    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path).map_err(|source| {
            EngineError::CatalogUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&json)
    }

    /// All careers in definition order.
    pub fn all(&self) -> &[CareerDefinition] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }
}

fn validate_entry(career: &CareerDefinition) -> Result<(), EngineError> {
    if career.name.trim().is_empty() {
        return Err(invalid(&career.name, "name must not be empty"));
    }
    if career.required_skills.is_empty() {
        return Err(invalid(&career.name, "required_skills must not be empty"));
    }
    if career.related_interests.is_empty() {
        return Err(invalid(&career.name, "related_interests must not be empty"));
    }

    for (field, value) in [
        ("growth_score", career.growth_score),
        ("stability_score", career.stability_score),
        ("market_demand", career.market_demand),
        ("risk_level", career.risk_level),
    ] {
        if !(0.0..=10.0).contains(&value) {
            return Err(invalid(
                &career.name,
                &format!("{field} must be within 0-10, got {value}"),
            ));
        }
    }

    if let Some(salary) = career.average_salary_lpa {
        if !salary.is_finite() || salary < 0.0 {
            return Err(invalid(
                &career.name,
                &format!("average_salary_lpa must be non-negative, got {salary}"),
            ));
        }
    }

    Ok(())
}

fn invalid(career: &str, reason: &str) -> EngineError {
    EngineError::InvalidCatalogEntry {
        career: career.to_string(),
        reason: reason.to_string(),
    }
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
