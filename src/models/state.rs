use sqlx::PgPool;

use crate::services::metrics::Metrics;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// The PostgreSQL database connection pool.
    pub db_pool: PgPool,
    /// Metrics registry and handles, scraped by the `/metrics` endpoint.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates a new application state with the provided database pool and a
    /// freshly built metrics registry.
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            metrics: Metrics::new(),
        }
    }
}
