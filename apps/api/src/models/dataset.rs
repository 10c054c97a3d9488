use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A question/answer pair under curation. `chunk_content` is denormalized at
/// generation time; when it is missing, the source chunk is reachable through
/// `question_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DatasetRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub question: String,
    pub answer: String,
    pub chunk_name: Option<String>,
    pub chunk_content: Option<String>,
    pub question_id: Option<Uuid>,
    /// Quantized 0.5-step score from the last evaluation, if any.
    pub score: Option<f64>,
    pub ai_evaluation: Option<String>,
    pub created_at: DateTime<Utc>,
}
