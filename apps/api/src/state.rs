use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::engine::recommend::Recommender;
use crate::history::HistoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the read-only career catalog, loaded once at startup.
    pub recommender: Arc<Recommender>,
    /// Pluggable history backend. Default: PgHistoryStore.
    pub history: Arc<dyn HistoryStore>,
    pub tokens: TokenVerifier,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// Built-in catalog with an in-memory history store.
    pub fn for_tests() -> Self {
        use crate::auth::tests::TEST_SECRET;
        use crate::engine::catalog::CareerCatalog;
        use crate::history::MemoryHistoryStore;

        let catalog = CareerCatalog::builtin().expect("built-in catalog is valid");
        Self {
            recommender: Arc::new(Recommender::new(Arc::new(catalog))),
            history: Arc::new(MemoryHistoryStore::default()),
            tokens: TokenVerifier::new(TEST_SECRET.as_bytes()),
            config: Config {
                database_url: "postgres://localhost/careermatrix_test".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                jwt_secret: TEST_SECRET.to_string(),
                catalog_path: None,
                max_upload_bytes: 64 * 1024,
            },
        }
    }
}
