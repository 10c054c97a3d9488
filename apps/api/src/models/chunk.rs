use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A text chunk split from uploaded literature. The reserved name
/// "Distilled Content" marks synthetic chunks with no source passage.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChunkRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
