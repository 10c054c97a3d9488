//! Axum route handlers for question generation and distillation.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ModelConfig;
use crate::models::chunk::ChunkRow;
use crate::prompts::Language;
use crate::questions::generator::{
    distill_questions, generate_questions, DistillQuestionsParams, GaSelection, QuestionParams,
};
use crate::state::AppState;

/// Genre/audience pair as sent by the UI. `active: false` pairs are carried
/// in project settings but must not influence generation.
#[derive(Debug, Deserialize)]
pub struct GaPairBody {
    pub genre: String,
    pub audience: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub chunk_id: Uuid,
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
    pub number: Option<usize>,
    pub active_ga_pair: Option<GaPairBody>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct DistillQuestionsRequest {
    pub tag_path: String,
    pub current_tag: String,
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
    pub count: Option<usize>,
    #[serde(default)]
    pub existing_questions: Vec<String>,
}

impl GaPairBody {
    fn into_selection(self) -> GaSelection {
        if self.active {
            GaSelection::Active {
                genre: self.genre,
                audience: self.audience,
            }
        } else {
            GaSelection::Inactive
        }
    }
}

/// POST /api/projects/:project_id/questions/generate
///
/// Generates questions from a chunk and persists them bound to that chunk.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
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

    let params = QuestionParams {
        text: chunk.content,
        number: request.number,
        ga: request
            .active_ga_pair
            .map(GaPairBody::into_selection)
            .unwrap_or_default(),
    };

    let questions = generate_questions(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &params,
    )
    .await?;

    for question in &questions {
        sqlx::query(
            "INSERT INTO questions (id, project_id, chunk_id, question) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(request.chunk_id)
        .bind(question)
        .execute(&state.db)
        .await?;
    }

    info!(
        "Persisted {} questions for chunk {}",
        questions.len(),
        request.chunk_id
    );

    let total = questions.len();
    Ok(Json(GenerateQuestionsResponse { questions, total }))
}

/// POST /api/projects/:project_id/distill/questions
///
/// Generates questions for a tag without source text. Persistence is the
/// caller's choice: distilled questions are reviewed in the UI first.
pub async fn handle_distill_questions(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<DistillQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    if request.current_tag.trim().is_empty() {
        return Err(AppError::Validation("current_tag cannot be empty".to_string()));
    }

    let mut params = DistillQuestionsParams::new(request.tag_path, request.current_tag);
    if let Some(count) = request.count {
        params.count = count;
    }
    params.existing_questions = request.existing_questions;

    let questions = distill_questions(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &params,
    )
    .await?;

    let total = questions.len();
    Ok(Json(GenerateQuestionsResponse { questions, total }))
}
