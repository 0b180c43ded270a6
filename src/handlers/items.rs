//! # Item Handlers
//!
//! CRUD endpoints over the `items` table. Each handler performs exactly one
//! storage operation and serializes the result; there is no business logic
//! beyond the existence check on update and delete.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{AppState, Item};

/// Request body for creating or updating an item. `name` may be absent or
/// null; a body whose `name` is any other JSON type is rejected before it
/// reaches the storage layer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub name: Option<String>,
}

/// Response carrying a confirmation message and the affected item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub message: String,
    pub item: Item,
}

/// Response carrying only a confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Creates a new item.
///
/// POST /items
///
/// The database assigns the identifier; the handler stores `name` as given,
/// including an absent or null one.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemPayload>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    debug!("Processing item creation request");

    let item = sqlx::query_as::<_, Item>(
        "INSERT INTO items (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&payload.name)
    .fetch_one(&state.db_pool)
    .await?;

    info!(item_id = %item.id, "Item created");
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: "Item created".to_string(),
            item,
        }),
    ))
}

/// Lists every item in the collection, in storage-defined order.
///
/// GET /items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = [Item]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<Item>>> {
    debug!("Processing item list request");

    let items = sqlx::query_as::<_, Item>("SELECT id, name FROM items")
        .fetch_all(&state.db_pool)
        .await?;

    info!(count = items.len(), "Items listed");
    Ok(Json(items))
}

/// Replaces the `name` of an existing item and returns the updated row.
///
/// PUT /items/{id}
///
/// The identifier is parsed explicitly: a string that is not a valid UUID is
/// a storage failure (500), not a routing error.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure or malformed identifier", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip_all, fields(item_id = %id, request_id = %Uuid::new_v4()))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<ItemPayload>,
) -> AppResult<Json<ItemResponse>> {
    debug!("Processing item update request");
    let id = Uuid::parse_str(&id)?;

    let item = sqlx::query_as::<_, Item>(
        "UPDATE items SET name = $1 WHERE id = $2 RETURNING id, name",
    )
    .bind(&payload.name)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or(AppError::NotFound)?;

    info!("Item updated");
    Ok(Json(ItemResponse {
        message: "Item updated".to_string(),
        item,
    }))
}

/// Removes an item by identifier.
///
/// DELETE /items/{id}
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure or malformed identifier", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip_all, fields(item_id = %id, request_id = %Uuid::new_v4()))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    debug!("Processing item delete request");
    let id = Uuid::parse_str(&id)?;

    let result = sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    info!("Item deleted");
    Ok(Json(MessageResponse {
        message: "Item deleted".to_string(),
    }))
}
