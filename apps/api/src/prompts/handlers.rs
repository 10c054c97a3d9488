//! Axum route handlers for the prompt-settings surface.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::prompts::overrides::resolve_template;
use crate::prompts::{default_template, Language, PromptType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub prompt_type: PromptType,
    pub prompt_key: String,
    pub language: Language,
    pub content: String,
    pub overridden: bool,
}

/// GET /api/projects/:project_id/prompts/:prompt_type/:base_key
///
/// Returns the template the pipeline would use for this key: the project's
/// active override when present, the built-in default otherwise. The settings
/// UI shows this as the effective prompt content.
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path((project_id, prompt_type, base_key)): Path<(Uuid, PromptType, String)>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<TemplateResponse>, AppError> {
    let default = default_template(prompt_type, &base_key, query.language).ok_or_else(|| {
        AppError::NotFound(format!(
            "No built-in template for {}/{base_key}",
            prompt_type.as_str()
        ))
    })?;

    let content = resolve_template(
        state.overrides.as_ref(),
        Some(project_id),
        prompt_type,
        &base_key,
        query.language,
        default,
    )
    .await;

    let overridden = content != default;
    Ok(Json(TemplateResponse {
        prompt_type,
        prompt_key: query.language.prompt_key(&base_key),
        language: query.language,
        content,
        overridden,
    }))
}
