//! # Metrics Handler
//!
//! Serves the Prometheus text exposition for scraping. Deliberately left out
//! of the OpenAPI document; scrapers read it, people do not.

use std::sync::Arc;

use axum::extract::State;

use crate::models::AppState;

/// Renders the registry held in application state.
///
/// GET /metrics
pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.encode()
}
