//! Axum route handlers for tag distillation and tree revision.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ModelConfig;
use crate::prompts::Language;
use crate::state::AppState;
use crate::tags::distiller::{distill_tags, DistillTagsParams};
use crate::tags::revision::{revise_tag_tree, LabelReviseParams, TagNode};

#[derive(Debug, Deserialize)]
pub struct DistillTagsRequest {
    #[serde(default)]
    pub tag_path: String,
    pub parent_tag: String,
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
    pub count: Option<usize>,
    #[serde(default)]
    pub existing_tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DistillTagsResponse {
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviseTagsRequest {
    pub existing_tags: Vec<TagNode>,
    /// TOC overview of all current literature.
    pub toc: String,
    pub deleted_content: Option<String>,
    pub new_content: Option<String>,
    pub model: ModelConfig,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct ReviseTagsResponse {
    pub tags: Vec<TagNode>,
}

/// POST /api/projects/:project_id/distill/tags
///
/// Generates ordinal-numbered sub-tags under a parent topic. The revised
/// labels are returned for review; persistence happens on confirm.
pub async fn handle_distill_tags(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<DistillTagsRequest>,
) -> Result<Json<DistillTagsResponse>, AppError> {
    if request.parent_tag.trim().is_empty() {
        return Err(AppError::Validation("parent_tag cannot be empty".to_string()));
    }

    let mut params = DistillTagsParams::new(request.tag_path, request.parent_tag);
    if let Some(count) = request.count {
        params.count = count;
    }
    params.existing_tags = request.existing_tags;

    let labels = distill_tags(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &params,
    )
    .await?;

    Ok(Json(DistillTagsResponse { labels }))
}

/// POST /api/projects/:project_id/tags/revise
///
/// Revises the project's domain tree against added/deleted literature and
/// returns the validated revised forest.
pub async fn handle_revise_tags(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<ReviseTagsRequest>,
) -> Result<Json<ReviseTagsResponse>, AppError> {
    if request.toc.trim().is_empty() {
        return Err(AppError::Validation("toc cannot be empty".to_string()));
    }

    let params = LabelReviseParams {
        existing_tags: request.existing_tags,
        toc: request.toc,
        deleted_content: request.deleted_content,
        new_content: request.new_content,
    };

    let tags = revise_tag_tree(
        &state.llm,
        state.overrides.as_ref(),
        Some(project_id),
        request.language,
        &request.model,
        &params,
    )
    .await?;

    Ok(Json(ReviseTagsResponse { tags }))
}
