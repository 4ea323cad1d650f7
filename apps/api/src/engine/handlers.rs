//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::auth::MaybeAuthUser;
use crate::engine::profile::{RawProfile, UserProfile};
use crate::engine::recommend::{RecommendationResult, Salary};
use crate::errors::AppError;
use crate::models::history::NewHistoryRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CareerSummary {
    pub name: String,
    pub category: String,
    pub required_skills: Vec<String>,
    pub average_salary_lpa: Salary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommend
///
/// Scores the catalog against the submitted profile and returns the primary
/// and backup careers with breakdown, learning plan and roadmap. Results for
/// an authenticated caller are saved to their history.
pub async fn handle_recommend(
    State(state): State<AppState>,
    MaybeAuthUser(caller): MaybeAuthUser,
    payload: Result<Json<RawProfile>, JsonRejection>,
) -> Result<Json<RecommendationResult>, AppError> {
    let Json(raw) = payload?;
    let profile = UserProfile::try_from(raw)?;
    let result = state.recommender.recommend(&profile)?;

    info!(
        primary = %result.primary_recommendation.career,
        backup = %result.backup_recommendation.career,
        "Recommendation computed"
    );

    if let Some(caller) = caller {
        let record = NewHistoryRecord::from_recommendation(caller.user_id, &profile, &result);
        state.history.append(record).await?;
    }

    Ok(Json(result))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerSummary>> {
    let careers = state
        .recommender
        .catalog()
        .all()
        .iter()
        .map(|c| CareerSummary {
            name: c.name.clone(),
            category: c.category.clone(),
            required_skills: c.required_skills.clone(),
            average_salary_lpa: c.average_salary_lpa.into(),
        })
        .collect();

    Json(careers)
}
