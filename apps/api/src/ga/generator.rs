//! Genre/audience pair generation — produces fixed-size batches of framing
//! pairs used to diversify question generation.
//!
//! Mutual distinctness within a batch is a model-output contract enforced by
//! the prompt, not a code invariant; the validator checks shape only.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, ValidationError};
use crate::ga::prompts::{ga_generation_template, GA_GENERATION_KEY};
use crate::llm_client::extract::extract_structured;
use crate::llm_client::{LlmClient, ModelConfig};
use crate::prompts::overrides::{resolve_template, OverrideStore};
use crate::prompts::render::{render, PlaceholderSet};
use crate::prompts::{Language, PromptType};

/// Every generation batch carries exactly this many pairs.
pub const GA_PAIRS_COUNT: usize = 5;

/// One side of a pair: a genre or an audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaFacet {
    pub title: String,
    pub description: String,
}

/// A genre/audience combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaPair {
    pub genre: GaFacet,
    pub audience: GaFacet,
}

/// Fills the GA generation template.
pub fn build_ga_generation_prompt(template: &str, text: &str) -> String {
    render(template, &PlaceholderSet::new().set("text", text))
}

/// Validates a parsed GA generation response: exactly five pairs, all four
/// title/description fields non-empty.
pub fn validate_ga_pairs(value: &Value) -> Result<Vec<GaPair>, ValidationError> {
    let pairs: Vec<GaPair> = serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::MalformedGAPairs(format!("not a pair array: {e}")))?;

    if pairs.len() != GA_PAIRS_COUNT {
        return Err(ValidationError::MalformedGAPairs(format!(
            "expected {GA_PAIRS_COUNT} pairs, got {}",
            pairs.len()
        )));
    }

    for (index, pair) in pairs.iter().enumerate() {
        for (field, text) in [
            ("genre.title", &pair.genre.title),
            ("genre.description", &pair.genre.description),
            ("audience.title", &pair.audience.title),
            ("audience.description", &pair.audience.description),
        ] {
            if text.trim().is_empty() {
                return Err(ValidationError::MalformedGAPairs(format!(
                    "pair {index} has an empty {field}"
                )));
            }
        }
    }
    Ok(pairs)
}

/// Runs the GA generation pipeline:
/// resolve template → build prompt → invoke → extract → validate.
pub async fn generate_ga_pairs(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    text: &str,
) -> Result<Vec<GaPair>, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::GaGeneration,
        GA_GENERATION_KEY,
        language,
        ga_generation_template(language),
    )
    .await;

    let prompt = build_ga_generation_prompt(&template, text);
    let raw = llm.invoke(&prompt, model).await?;
    let parsed = extract_structured(&raw)?;
    let pairs = validate_ga_pairs(&parsed)?;

    info!("Generated {} genre/audience pairs", pairs.len());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair_value(tag: &str) -> Value {
        json!({
            "genre": {"title": format!("genre {tag}"), "description": format!("genre desc {tag}")},
            "audience": {"title": format!("audience {tag}"), "description": format!("audience desc {tag}")}
        })
    }

    fn batch(n: usize) -> Value {
        Value::Array((0..n).map(|i| pair_value(&i.to_string())).collect())
    }

    #[test]
    fn test_build_prompt_fills_every_placeholder() {
        for language in [Language::Zh, Language::En] {
            let prompt = build_ga_generation_prompt(ga_generation_template(language), "源文本内容");
            assert!(!prompt.contains("{{"), "unresolved token in {language:?} prompt");
            assert!(prompt.ends_with("源文本内容"));
        }
    }

    #[test]
    fn test_validate_accepts_exactly_five_pairs() {
        let pairs = validate_ga_pairs(&batch(5)).unwrap();
        assert_eq!(pairs.len(), GA_PAIRS_COUNT);
        assert_eq!(pairs[0].genre.title, "genre 0");
    }

    #[test]
    fn test_validate_scenario_e_four_pairs_fail() {
        let err = validate_ga_pairs(&batch(4)).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedGAPairs(_)));
    }

    #[test]
    fn test_validate_six_pairs_fail() {
        let err = validate_ga_pairs(&batch(6)).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedGAPairs(_)));
    }

    #[test]
    fn test_validate_empty_field_fails() {
        let mut value = batch(5);
        value[2]["audience"]["description"] = json!("   ");
        let err = validate_ga_pairs(&value).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedGAPairs(_)));
    }

    #[test]
    fn test_validate_missing_facet_fails() {
        let mut value = batch(5);
        value[0] = json!({"genre": {"title": "t", "description": "d"}});
        let err = validate_ga_pairs(&value).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedGAPairs(_)));
    }

    #[test]
    fn test_validate_non_array_fails() {
        let err = validate_ga_pairs(&json!({"pairs": []})).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedGAPairs(_)));
    }
}
