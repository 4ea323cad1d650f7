//! Recommendation Orchestrator — scores the whole catalog and picks the top two.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::engine::catalog::{CareerCatalog, CareerDefinition};
use crate::engine::gap_plan::{self, GapPlanItem};
use crate::engine::profile::UserProfile;
use crate::engine::roadmap::{self, Roadmap};
use crate::engine::scoring::{self, ScoreBreakdown};
use crate::engine::EngineError;

/// Average salary in lakhs per annum, or "Not Available" when the catalog has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Salary {
    Lpa(f64),
    NotAvailable,
}

impl From<Option<f64>> for Salary {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Salary::NotAvailable, Salary::Lpa)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Salary::Lpa(value) => serializer.serialize_f64(*value),
            Salary::NotAvailable => serializer.serialize_str("Not Available"),
        }
    }
}

/// Full explained evaluation of one career for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerAnalysis {
    pub career: String,
    pub category: String,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub core_strengths: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    pub learning_plan: Vec<GapPlanItem>,
    pub career_roadmap: Roadmap,
    pub risk_level: f64,
    pub market_demand: f64,
    pub average_salary_lpa: Salary,
    pub future_scope: String,
    pub work_style: String,
    pub industry_trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub primary_recommendation: CareerAnalysis,
    pub backup_recommendation: CareerAnalysis,
}

/// Runs scorer, gap planner and roadmap synthesizer over a shared catalog.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<CareerCatalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<CareerCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn analyze(&self, user: &UserProfile, career: &CareerDefinition) -> CareerAnalysis {
        let breakdown = scoring::score(user, career);
        let learning_plan = gap_plan::plan(user.skills(), career);
        let career_roadmap = roadmap::synthesize(&learning_plan);

        CareerAnalysis {
            career: career.name.clone(),
            category: career.category.clone(),
            match_score: breakdown.total,
            matched_skills: scoring::matched_skills(user, career),
            missing_skills: learning_plan.iter().map(|item| item.skill.clone()).collect(),
            core_strengths: career.core_strengths.clone(),
            score_breakdown: breakdown,
            learning_plan,
            career_roadmap,
            risk_level: career.risk_level,
            market_demand: career.market_demand,
            average_salary_lpa: career.average_salary_lpa.into(),
            future_scope: career.future_scope.clone(),
            work_style: career.work_style.clone(),
            industry_trend: career.industry_trend.clone(),
        }
    }

    /// Analyses every career and returns the two best.
    ///
    /// Sorted by `match_score` descending with a stable sort, so equal scores
    /// keep catalog order.
    pub fn recommend(&self, user: &UserProfile) -> Result<RecommendationResult, EngineError> {
        let found = self.catalog.len();
        if found < 2 {
            return Err(EngineError::InsufficientCatalog { found });
        }

        let mut analyses: Vec<CareerAnalysis> = self
            .catalog
            .all()
            .iter()
            .map(|career| self.analyze(user, career))
            .collect();

        analyses.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        debug!(careers = analyses.len(), "Ranked career analyses");

        let mut ranked = analyses.into_iter();
        let (Some(primary), Some(backup)) = (ranked.next(), ranked.next()) else {
            return Err(EngineError::InsufficientCatalog { found });
        };

        debug!(
            primary = %primary.career,
            primary_score = primary.match_score,
            backup = %backup.career,
            backup_score = backup.match_score,
            "Selected recommendations"
        );

        Ok(RecommendationResult {
            primary_recommendation: primary,
            backup_recommendation: backup,
        })
    }
}
