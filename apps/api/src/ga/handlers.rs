//! Axum route handler for genre/audience pair generation.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ga::generator::{generate_ga_pairs, GaPair};
use crate::llm_client::ModelConfig;
use crate::models::chunk::ChunkRow;
use crate::prompts::Language;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateGaRequest {
    pub chunk_id: Uuid,
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct GenerateGaResponse {
    pub pairs: Vec<GaPair>,
}

/// POST /api/projects/:project_id/ga/generate
///
/// Generates five genre/audience pairs from a chunk's text. Pairs are
/// returned for review and activation in the UI.
pub async fn handle_generate_ga(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<GenerateGaRequest>,
) -> Result<Json<GenerateGaResponse>, AppError> {
    let chunk = sqlx::query_as::<_, ChunkRow>("SELECT * FROM chunks WHERE id = $1")
        .bind(request.chunk_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Chunk {} not found", request.chunk_id)))?;

    if chunk.project_id != project_id {
        return Err(AppError::Forbidden);
    }
    if chunk.content.trim().is_empty() {
        return Err(AppError::Validation("Chunk has no content".to_string()));
    }

    let pairs = generate_ga_pairs(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &chunk.content,
    )
    .await?;

    Ok(Json(GenerateGaResponse { pairs }))
}
