//! Axum route handlers for dataset evaluation and chunk cleaning.
//!
//! Handlers own the collaborator edges the pipeline core stays out of:
//! loading rows, persisting validated results, mapping to HTTP.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::datasets::cleaning::clean_chunk;
use crate::datasets::evaluation::{chunk_reference, evaluate_dataset, EvaluationParams};
use crate::errors::AppError;
use crate::llm_client::ModelConfig;
use crate::models::chunk::ChunkRow;
use crate::models::dataset::DatasetRow;
use crate::prompts::Language;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub score: f64,
    pub evaluation: String,
}

#[derive(Debug, Deserialize)]
pub struct CleanChunkRequest {
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct CleanChunkResponse {
    pub content: String,
}

/// POST /api/projects/:project_id/datasets/:dataset_id/evaluate
///
/// Scores one dataset against its source chunk and persists the quantized
/// score plus rationale. Distilled datasets are evaluated in no-reference
/// mode via the sentinel.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Path((project_id, dataset_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let dataset = sqlx::query_as::<_, DatasetRow>("SELECT * FROM datasets WHERE id = $1")
        .bind(dataset_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Dataset {dataset_id} not found")))?;

    if dataset.project_id != project_id {
        return Err(AppError::Forbidden);
    }

    // Denormalized chunk content is preferred; fall back to the chunk behind
    // the dataset's question. A failed fallback lookup is not fatal — the
    // evaluation degrades to no-reference mode.
    let mut chunk_name = dataset.chunk_name.clone();
    let mut chunk_content = dataset.chunk_content.clone();
    if chunk_content.as_deref().map_or(true, |c| c.trim().is_empty()) {
        if let Some(question_id) = dataset.question_id {
            match lookup_question_chunk(&state, question_id).await {
                Ok(Some(chunk)) => {
                    chunk_name = Some(chunk.name);
                    chunk_content = Some(chunk.content);
                }
                Ok(None) => {}
                Err(e) => warn!("Chunk lookup for question {question_id} failed: {e}"),
            }
        }
    }

    let params = EvaluationParams {
        chunk_content: chunk_reference(
            chunk_name.as_deref(),
            chunk_content.as_deref(),
            request.language,
        ),
        question: dataset.question,
        answer: dataset.answer,
    };

    let result = evaluate_dataset(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &params,
    )
    .await?;

    sqlx::query("UPDATE datasets SET score = $1, ai_evaluation = $2 WHERE id = $3")
        .bind(result.score)
        .bind(&result.evaluation)
        .bind(dataset_id)
        .execute(&state.db)
        .await?;

    Ok(Json(EvaluateResponse {
        score: result.score,
        evaluation: result.evaluation,
    }))
}

async fn lookup_question_chunk(
    state: &AppState,
    question_id: Uuid,
) -> Result<Option<ChunkRow>, sqlx::Error> {
    sqlx::query_as::<_, ChunkRow>(
        r#"
        SELECT c.* FROM chunks c
        JOIN questions q ON q.chunk_id = c.id
        WHERE q.id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(&state.db)
    .await
}

/// POST /api/projects/:project_id/chunks/:chunk_id/clean
///
/// Cleans a chunk's text through the model and persists the result.
pub async fn handle_clean_chunk(
    State(state): State<AppState>,
    Path((project_id, chunk_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<CleanChunkRequest>,
) -> Result<Json<CleanChunkResponse>, AppError> {
    let chunk = sqlx::query_as::<_, ChunkRow>("SELECT * FROM chunks WHERE id = $1")
        .bind(chunk_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Chunk {chunk_id} not found")))?;

    if chunk.project_id != project_id {
        return Err(AppError::Forbidden);
    }
    if chunk.content.trim().is_empty() {
        return Err(AppError::Validation("Chunk has no content to clean".to_string()));
    }

    let cleaned = clean_chunk(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &chunk.content,
    )
    .await?;

    sqlx::query("UPDATE chunks SET content = $1 WHERE id = $2")
        .bind(&cleaned)
        .bind(chunk_id)
        .execute(&state.db)
        .await?;

    Ok(Json(CleanChunkResponse { content: cleaned }))
}
