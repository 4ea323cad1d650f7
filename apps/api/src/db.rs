use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the recommendation history table and its index if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recommendation_history (
            id              UUID PRIMARY KEY,
            user_id         UUID NOT NULL,
            skills          TEXT NOT NULL,
            interests       TEXT NOT NULL,
            career_mode     TEXT NOT NULL,
            risk_preference TEXT NOT NULL,
            primary_career  TEXT NOT NULL,
            backup_career   TEXT NOT NULL,
            primary_score   DOUBLE PRECISION NOT NULL,
            backup_score    DOUBLE PRECISION NOT NULL,
            created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS recommendation_history_user_created_idx \
         ON recommendation_history (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    info!("Recommendation history schema ready");
    Ok(())
}
