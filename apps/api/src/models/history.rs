use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::engine::profile::UserProfile;
use crate::engine::recommend::RecommendationResult;

/// One stored recommendation. Skills and interests are kept as comma-joined
/// strings, not arrays, in the profile's sorted set order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skills: String,
    pub interests: String,
    pub career_mode: String,
    pub risk_preference: String,
    pub primary_career: String,
    pub backup_career: String,
    pub primary_score: f64,
    pub backup_score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryRecord {
    pub user_id: Uuid,
    pub skills: String,
    pub interests: String,
    pub career_mode: String,
    pub risk_preference: String,
    pub primary_career: String,
    pub backup_career: String,
    pub primary_score: f64,
    pub backup_score: f64,
}

impl NewHistoryRecord {
    pub fn from_recommendation(
        user_id: Uuid,
        profile: &UserProfile,
        result: &RecommendationResult,
    ) -> Self {
        let join = |items: &std::collections::BTreeSet<String>| {
            items.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        };

        Self {
            user_id,
            skills: join(profile.skills()),
            interests: join(profile.interests()),
            career_mode: profile.career_mode().to_string(),
            risk_preference: profile.risk_preference().to_string(),
            primary_career: result.primary_recommendation.career.clone(),
            backup_career: result.backup_recommendation.career.clone(),
            primary_score: result.primary_recommendation.match_score,
            backup_score: result.backup_recommendation.match_score,
        }
    }
}
