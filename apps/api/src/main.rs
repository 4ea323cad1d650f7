mod auth;
mod config;
mod db;
mod engine;
mod errors;
mod history;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::engine::catalog::CareerCatalog;
use crate::engine::recommend::Recommender;
use crate::history::PgHistoryStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerMatrix API v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the career catalog once; it is read-only from here on
    let catalog = match &config.catalog_path {
        Some(path) => CareerCatalog::from_path(path)
            .with_context(|| format!("Failed to load career catalog from {}", path.display()))?,
        None => CareerCatalog::builtin().context("Built-in career catalog is invalid")?,
    };
    info!(careers = catalog.len(), "Career catalog loaded");
    let recommender = Arc::new(Recommender::new(Arc::new(catalog)));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;
    let history = Arc::new(PgHistoryStore::new(db));

    // Build app state
    let state = AppState {
        recommender,
        history,
        tokens: TokenVerifier::new(config.jwt_secret.as_bytes()),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict CORS origins to the dashboard host
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
