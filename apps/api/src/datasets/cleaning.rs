//! Chunk cleaning — asks the model to strip noise from a raw text chunk.
//! The response is plain text, so this pipeline has no extraction stage.

use tracing::info;
use uuid::Uuid;

use crate::datasets::prompts::{data_clean_template, DATA_CLEAN_KEY};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, ModelConfig};
use crate::prompts::overrides::{resolve_template, OverrideStore};
use crate::prompts::render::{render, PlaceholderSet};
use crate::prompts::{Language, PromptType};

/// Fills the data-clean template. `textLength` is the glyph count of the
/// chunk, not its byte length.
pub fn build_clean_prompt(template: &str, text: &str) -> String {
    render(
        template,
        &PlaceholderSet::new()
            .set("textLength", text.chars().count())
            .set("text", text),
    )
}

/// Runs the cleaning pipeline and returns the cleaned text.
pub async fn clean_chunk(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    text: &str,
) -> Result<String, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::DataClean,
        DATA_CLEAN_KEY,
        language,
        data_clean_template(language),
    )
    .await;

    let prompt = build_clean_prompt(&template, text);
    let cleaned = llm.invoke(&prompt, model).await?;
    let cleaned = cleaned.trim().to_string();

    info!(
        "Chunk cleaned: {} chars in, {} chars out",
        text.chars().count(),
        cleaned.chars().count()
    );
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_clean_prompt_fills_every_placeholder() {
        for language in [Language::Zh, Language::En] {
            let prompt = build_clean_prompt(data_clean_template(language), "some  noisy   text");
            assert!(!prompt.contains("{{"), "unresolved token in {language:?} prompt");
            assert!(prompt.contains("some  noisy   text"));
        }
    }

    #[test]
    fn test_build_clean_prompt_counts_glyphs_not_bytes() {
        let prompt = build_clean_prompt("长度：{{textLength}} 字\n{{text}}", "数据清洗");
        assert!(prompt.contains("长度：4 字"));
    }
}
