//! # Item Service
//!
//! Minimal CRUD service over a single `items` collection, with a Prometheus
//! metrics endpoint, a latency probe, and generated OpenAPI documentation.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for all endpoints
//! - [`middleware`] - Request-tracking middleware feeding the metrics registry
//! - [`models`] - The item entity and shared application state
//! - [`services`] - The metrics registry wrapper

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{create_item, delete_item, fast, list_items, metrics, update_item};
use crate::middleware::track_metrics;
use crate::models::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::fast::fast,
        handlers::items::create_item,
        handlers::items::list_items,
        handlers::items::update_item,
        handlers::items::delete_item,
    ),
    components(schemas(
        models::Item,
        handlers::ItemPayload,
        handlers::ItemResponse,
        handlers::MessageResponse,
        handlers::FastResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "Items", description = "CRUD over the item collection"),
        (name = "Probes", description = "Latency baselining")
    ),
    info(title = "Item Service", description = "Minimal item CRUD API")
)]
pub struct ApiDoc;

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `db_pool` - PostgreSQL database connection pool
///
/// # Returns
///
/// A configured Axum router with all application routes, the metrics
/// middleware, and Swagger UI mounted at `/docs`.
pub fn app(db_pool: PgPool) -> Router {
    let state = Arc::new(AppState::new(db_pool));

    Router::new()
        .route("/fast", get(fast))
        .route("/items", post(create_item))
        .route("/items", get(list_items))
        .route("/items/{id}", put(update_item))
        .route("/items/{id}", delete(delete_item))
        .route("/metrics", get(metrics))
        .layer(from_fn_with_state(Arc::clone(&state), track_metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
