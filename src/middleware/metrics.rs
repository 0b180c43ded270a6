//! Request-tracking middleware that feeds the Prometheus registry.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::models::AppState;

/// Records a counter increment and a duration observation for every request
/// passing through the router, labeled by method, path and response status.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [method.as_str(), path.as_str(), status.as_str()];
    state
        .metrics
        .http_requests_total
        .with_label_values(&labels)
        .inc();
    state
        .metrics
        .http_request_duration_seconds
        .with_label_values(&labels)
        .observe(duration);

    response
}
