//! # Fast Handler
//!
//! Static acknowledgment endpoint used for latency baselining. It touches
//! neither the database nor any shared state, so its response time is a
//! floor for everything else the service does.

use axum::Json;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use utoipa::ToSchema;

/// Static payload with the current Unix timestamp in nanoseconds.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FastResponse {
    pub message: String,
    /// Nanoseconds since the Unix epoch at the time the request was served.
    /// Nanosecond resolution keeps the value strictly increasing across
    /// successive calls, however close together they land.
    pub timestamp: i64,
}

/// Latency probe that returns a canned message and a timestamp.
///
/// GET /fast
#[utoipa::path(
    get,
    path = "/fast",
    responses(
        (status = 200, description = "Static acknowledgment with timestamp", body = FastResponse)
    ),
    tag = "Probes"
)]
#[instrument]
pub async fn fast() -> Json<FastResponse> {
    debug!("Fast endpoint accessed");

    let now = OffsetDateTime::now_utc();
    Json(FastResponse {
        message: "This is a fast endpoint!".to_string(),
        timestamp: now.unix_timestamp_nanos() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timestamp_increases_even_back_to_back() {
        let first = fast().await.0.timestamp;
        let second = fast().await.0.timestamp;
        assert!(second > first, "expected {second} > {first}");
    }
}
