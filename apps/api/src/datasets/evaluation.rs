//! Dataset quality evaluation — builds the evaluation prompt, invokes the
//! model, and validates the response into a quantized score + rationale.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::datasets::prompts::{evaluation_template, DATASET_EVALUATION_KEY};
use crate::errors::{AppError, ValidationError};
use crate::llm_client::extract::extract_structured;
use crate::llm_client::{LlmClient, ModelConfig};
use crate::prompts::overrides::{resolve_template, OverrideStore};
use crate::prompts::render::{render, PlaceholderSet};
use crate::prompts::{Language, PromptType};

/// Chunk name marking synthetically distilled content with no source passage.
pub const DISTILLED_CHUNK_NAME: &str = "Distilled Content";

/// Inputs for one evaluation prompt.
#[derive(Debug, Clone)]
pub struct EvaluationParams {
    pub chunk_content: String,
    pub question: String,
    pub answer: String,
}

/// Validated evaluation outcome. `score` is already quantized to 0.5 steps;
/// the quantized value is what gets persisted, never the raw model score.
/// Field names are consumed downstream as-is — do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub evaluation: String,
}

/// Sentinel inserted when no source passage exists for the dataset.
/// The evaluation templates key on the "Distilled Content" marker to switch
/// the model into no-reference mode.
pub fn distilled_sentinel(language: Language) -> &'static str {
    match language {
        Language::Zh => "Distilled Content - 没有原始文本参考",
        Language::En => "Distilled Content - no original text available",
    }
}

/// Resolves the chunk text an evaluation prompt should reference: the real
/// chunk content when one exists, the distillation sentinel when the chunk is
/// absent, empty, or flagged as distilled.
pub fn chunk_reference(
    chunk_name: Option<&str>,
    chunk_content: Option<&str>,
    language: Language,
) -> String {
    match chunk_content {
        Some(content)
            if !content.trim().is_empty()
                && !content.contains(DISTILLED_CHUNK_NAME)
                && chunk_name != Some(DISTILLED_CHUNK_NAME) =>
        {
            content.to_string()
        }
        _ => distilled_sentinel(language).to_string(),
    }
}

/// Fills the evaluation template. Pure: template resolution happens upstream.
pub fn build_evaluation_prompt(template: &str, params: &EvaluationParams) -> String {
    render(
        template,
        &PlaceholderSet::new()
            .set("chunkContent", &params.chunk_content)
            .set("question", &params.question)
            .set("answer", &params.answer),
    )
}

/// Quantizes a score to the nearest 0.5 step, rounding half away from zero.
pub fn quantize_score(score: f64) -> f64 {
    (score * 2.0).round() / 2.0
}

/// Validates a parsed evaluation response. Quantization is a post-condition
/// here, not a display rule: the returned score is the persisted one.
pub fn validate_evaluation(value: &Value) -> Result<EvaluationResult, ValidationError> {
    let score = value
        .get("score")
        .and_then(Value::as_f64)
        .unwrap_or(f64::NAN);
    if !score.is_finite() || !(0.0..=5.0).contains(&score) {
        return Err(ValidationError::InvalidScore { score });
    }

    let evaluation = value
        .get("evaluation")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if evaluation.is_empty() {
        return Err(ValidationError::MissingEvaluation);
    }

    Ok(EvaluationResult {
        score: quantize_score(score),
        evaluation: evaluation.to_string(),
    })
}

/// Runs the full evaluation pipeline:
/// resolve template → build prompt → invoke → extract → validate.
pub async fn evaluate_dataset(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    params: &EvaluationParams,
) -> Result<EvaluationResult, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::DatasetEvaluation,
        DATASET_EVALUATION_KEY,
        language,
        evaluation_template(language),
    )
    .await;

    let prompt = build_evaluation_prompt(&template, params);
    let raw = llm.invoke(&prompt, model).await?;
    let parsed = extract_structured(&raw)?;
    let result = validate_evaluation(&parsed)?;

    info!("Dataset evaluation scored {}", result.score);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> EvaluationParams {
        EvaluationParams {
            chunk_content: "Rust guarantees memory safety without garbage collection.".to_string(),
            question: "How does Rust guarantee memory safety?".to_string(),
            answer: "Through ownership and borrowing checked at compile time.".to_string(),
        }
    }

    #[test]
    fn test_build_prompt_fills_every_placeholder() {
        for language in [Language::Zh, Language::En] {
            let prompt = build_evaluation_prompt(evaluation_template(language), &params());
            assert!(!prompt.contains("{{"), "unresolved token in {language:?} prompt");
            assert!(prompt.contains("How does Rust guarantee memory safety?"));
        }
    }

    #[test]
    fn test_chunk_reference_uses_real_content() {
        let reference = chunk_reference(Some("chapter-1"), Some("real passage"), Language::Zh);
        assert_eq!(reference, "real passage");
    }

    #[test]
    fn test_chunk_reference_sentinel_for_missing_chunk() {
        let reference = chunk_reference(None, None, Language::En);
        assert_eq!(reference, "Distilled Content - no original text available");
    }

    #[test]
    fn test_chunk_reference_sentinel_for_empty_content() {
        let reference = chunk_reference(Some("chapter-1"), Some("   "), Language::Zh);
        assert!(reference.starts_with(DISTILLED_CHUNK_NAME));
    }

    #[test]
    fn test_chunk_reference_sentinel_for_distilled_chunk_name() {
        let reference = chunk_reference(Some(DISTILLED_CHUNK_NAME), Some("ignored"), Language::Zh);
        assert_eq!(reference, "Distilled Content - 没有原始文本参考");
    }

    #[test]
    fn test_quantize_rounds_to_half_steps() {
        assert_eq!(quantize_score(4.37), 4.5);
        assert_eq!(quantize_score(4.24), 4.0);
        assert_eq!(quantize_score(4.2), 4.0);
        assert_eq!(quantize_score(0.0), 0.0);
        assert_eq!(quantize_score(5.0), 5.0);
        // Half-way values round away from zero.
        assert_eq!(quantize_score(3.25), 3.5);
    }

    #[test]
    fn test_quantize_image_is_half_step_grid() {
        let mut s = 0.0;
        while s <= 5.0 {
            let q = quantize_score(s);
            assert_eq!((q * 2.0).fract(), 0.0, "quantize({s}) = {q} off-grid");
            s += 0.01;
        }
    }

    #[test]
    fn test_quantize_is_idempotent() {
        for s in [0.0, 0.3, 1.75, 2.5, 4.37, 5.0] {
            assert_eq!(quantize_score(quantize_score(s)), quantize_score(s));
        }
    }

    #[test]
    fn test_validate_scenario_a_quantizes_score() {
        let result =
            validate_evaluation(&json!({"score": 4.37, "evaluation": "Good answer."})).unwrap();
        assert_eq!(
            result,
            EvaluationResult {
                score: 4.5,
                evaluation: "Good answer.".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_scenario_b_out_of_range_score() {
        let err = validate_evaluation(&json!({"score": 7, "evaluation": "x"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidScore { .. }));
    }

    #[test]
    fn test_validate_negative_score_rejected() {
        let err = validate_evaluation(&json!({"score": -0.5, "evaluation": "x"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidScore { .. }));
    }

    #[test]
    fn test_validate_non_numeric_score_rejected() {
        let err = validate_evaluation(&json!({"score": "4.5", "evaluation": "x"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidScore { .. }));
    }

    #[test]
    fn test_validate_missing_evaluation_rejected() {
        let err = validate_evaluation(&json!({"score": 4.0})).unwrap_err();
        assert_eq!(err, ValidationError::MissingEvaluation);
    }

    #[test]
    fn test_validate_blank_evaluation_rejected() {
        let err = validate_evaluation(&json!({"score": 4.0, "evaluation": "  "})).unwrap_err();
        assert_eq!(err, ValidationError::MissingEvaluation);
    }

    #[test]
    fn test_evaluation_result_wire_field_names() {
        let result = EvaluationResult {
            score: 4.5,
            evaluation: "solid".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"score": 4.5, "evaluation": "solid"}));
    }
}
