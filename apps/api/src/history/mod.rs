//! Recommendation history — pluggable, trait-based store for past recommendations.
//!
//! Default: `PgHistoryStore` over the shared PostgreSQL pool.
//! `AppState` holds an `Arc<dyn HistoryStore>` so handlers never see the backend.

pub mod handlers;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::history::{HistoryRecord, NewHistoryRecord};

#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, record: NewHistoryRecord) -> Result<HistoryRecord, AppError>;

    /// Records for one user, newest first.
    async fn list(&self, user_id: Uuid) -> Result<Vec<HistoryRecord>, AppError>;

    /// Returns `false` when no record with that id belongs to the user.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}

pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, record: NewHistoryRecord) -> Result<HistoryRecord, AppError> {
        let row = sqlx::query_as::<_, HistoryRecord>(
            r#"
            INSERT INTO recommendation_history
                (id, user_id, skills, interests, career_mode, risk_preference,
                 primary_career, backup_career, primary_score, backup_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.user_id)
        .bind(&record.skills)
        .bind(&record.interests)
        .bind(&record.career_mode)
        .bind(&record.risk_preference)
        .bind(&record.primary_career)
        .bind(&record.backup_career)
        .bind(record.primary_score)
        .bind(record.backup_score)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<HistoryRecord>, AppError> {
        let rows = sqlx::query_as::<_, HistoryRecord>(
            "SELECT * FROM recommendation_history WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM recommendation_history WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// In-process store for handler tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: tokio::sync::RwLock<Vec<HistoryRecord>>,
}

#[cfg(test)]
#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, record: NewHistoryRecord) -> Result<HistoryRecord, AppError> {
        let stored = HistoryRecord {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            skills: record.skills,
            interests: record.interests,
            career_mode: record.career_mode,
            risk_preference: record.risk_preference,
            primary_career: record.primary_career,
            backup_career: record.backup_career,
            primary_score: record.primary_score,
            backup_score: record.backup_score,
            created_at: chrono::Utc::now(),
        };
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<HistoryRecord>, AppError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !(r.id == id && r.user_id == user_id));
        Ok(records.len() < before)
    }
}
