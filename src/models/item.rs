use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single stored item. The identifier is assigned by the database on
/// insert and never changes; only `name` is mutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: Uuid,
    /// Optional display name. May be null; no format or length constraint.
    pub name: Option<String>,
}
