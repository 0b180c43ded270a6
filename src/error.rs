//! # Centralized Error Handling
//!
//! Unified error type for the service. Every handler returns [`AppResult`],
//! and the error is converted into a JSON HTTP response in one place.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Central application error type covering the two failure categories the
/// service distinguishes: a missing item (404) and a storage failure (500).
///
/// A malformed identifier counts as a storage failure, not a client error:
/// the identifier format is owned by the storage layer, so a string that
/// cannot be parsed into one is reported exactly like any other storage
/// error, with the underlying message in the body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Db(#[from] sqlx::Error),

    #[error("{0}")]
    InvalidId(#[from] uuid::Error),

    #[error("Item not found")]
    NotFound,
}

/// JSON body every failed request carries: `{ "error": <text> }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Db(e) = &self {
            error!(?e, "Database error occurred");
        }

        let status = match self {
            AppError::Db(_) | AppError::InvalidId(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
