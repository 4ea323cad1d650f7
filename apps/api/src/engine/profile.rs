//! User profile — the four validated inputs the engine scores against.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Which raw career score drives the mode-preference component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerMode {
    Growth,
    Stability,
}

impl CareerMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CareerMode::Growth => "growth",
            CareerMode::Stability => "stability",
        }
    }
}

impl FromStr for CareerMode {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "growth" => Ok(CareerMode::Growth),
            "stability" => Ok(CareerMode::Stability),
            other => Err(EngineError::MissingRequiredField {
                field: "career_mode",
                reason: format!("expected 'growth' or 'stability', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for CareerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much career risk the user tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskPreference {
    Low,
    Medium,
    High,
}

impl RiskPreference {
    /// Point on the 0–10 career risk scale this preference is measured against.
    pub fn anchor(self) -> f64 {
        match self {
            RiskPreference::Low => 2.0,
            RiskPreference::Medium => 5.0,
            RiskPreference::High => 8.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskPreference::Low => "low",
            RiskPreference::Medium => "medium",
            RiskPreference::High => "high",
        }
    }
}

impl FromStr for RiskPreference {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskPreference::Low),
            "medium" => Ok(RiskPreference::Medium),
            "high" => Ok(RiskPreference::High),
            other => Err(EngineError::MissingRequiredField {
                field: "risk_preference",
                reason: format!("expected 'low', 'medium' or 'high', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for RiskPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable, validated user profile. One instance per request.
///
/// Skill and interest tokens are kept exactly as supplied (case-sensitive);
/// duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    skills: BTreeSet<String>,
    interests: BTreeSet<String>,
    career_mode: CareerMode,
    risk_preference: RiskPreference,
}

impl UserProfile {
    pub fn new<S, I>(
        skills: S,
        interests: I,
        career_mode: CareerMode,
        risk_preference: RiskPreference,
    ) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            interests: interests.into_iter().map(Into::into).collect(),
            career_mode,
            risk_preference,
        }
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    pub fn career_mode(&self) -> CareerMode {
        self.career_mode
    }

    pub fn risk_preference(&self) -> RiskPreference {
        self.risk_preference
    }
}

/// Unvalidated profile as it arrives over the wire. Every field is optional
/// here so that absence is reported as `MissingRequiredField` rather than a
/// generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub career_mode: Option<String>,
    pub risk_preference: Option<String>,
}

impl TryFrom<RawProfile> for UserProfile {
    type Error = EngineError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let skills = require(raw.skills, "skills")?;
        let interests = require(raw.interests, "interests")?;
        let career_mode: CareerMode = require(raw.career_mode, "career_mode")?.parse()?;
        let risk_preference: RiskPreference =
            require(raw.risk_preference, "risk_preference")?.parse()?;

        Ok(UserProfile::new(
            tidy_tokens(skills),
            tidy_tokens(interests),
            career_mode,
            risk_preference,
        ))
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, EngineError> {
    value.ok_or(EngineError::MissingRequiredField {
        field,
        reason: "field is required".to_string(),
    })
}

/// Trims surrounding whitespace and drops blank tokens. Case is left alone.
fn tidy_tokens(tokens: Vec<String>) -> impl Iterator<Item = String> {
    tokens
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
