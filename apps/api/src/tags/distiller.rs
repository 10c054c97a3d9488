//! Tag distillation — generates ordinal-numbered sub-tags for a parent topic
//! and validates the label grammar the rest of the system depends on.
//!
//! Label grammar: `"<ordinal> <text>"` where the ordinal is `N` for top-level
//! tags and `N.N` for second-level tags. The tree never exceeds two levels,
//! so a third ordinal segment is malformed.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, ValidationError};
use crate::llm_client::extract::extract_structured;
use crate::llm_client::{LlmClient, ModelConfig};
use crate::prompts::overrides::{resolve_template, OverrideStore};
use crate::prompts::render::{render, PlaceholderSet};
use crate::prompts::{Language, PromptType};
use crate::tags::prompts::{distill_tags_template, DISTILL_TAGS_KEY};

/// Default sub-tag count per distillation round.
const DEFAULT_TAG_COUNT: usize = 10;

/// Inputs for one sub-tag distillation prompt.
#[derive(Debug, Clone)]
pub struct DistillTagsParams {
    /// Full tag chain, e.g. "知识库->体育". Empty at the top level.
    pub tag_path: String,
    pub parent_tag: String,
    /// Sub-tags already created under this parent (avoid duplicates).
    pub existing_tags: Vec<String>,
    pub count: usize,
}

impl DistillTagsParams {
    pub fn new(tag_path: String, parent_tag: String) -> Self {
        Self {
            tag_path,
            parent_tag,
            existing_tags: Vec::new(),
            count: DEFAULT_TAG_COUNT,
        }
    }
}

/// Strips a leading `N` / `N.N` ordinal from a label: `"1.2 足球"` → `"足球"`.
/// Labels without an ordinal come back unchanged.
pub fn strip_leading_ordinal(label: &str) -> &str {
    match label.split_once(' ') {
        Some((ordinal, text)) if is_ordinal(ordinal) => text.trim_start(),
        _ => label,
    }
}

/// Checks the `"<ordinal> <text>"` label shape.
pub fn is_valid_tag_label(label: &str) -> bool {
    match label.split_once(' ') {
        Some((ordinal, text)) => is_ordinal(ordinal) && !text.trim().is_empty(),
        None => false,
    }
}

fn is_ordinal(ordinal: &str) -> bool {
    let segments: Vec<&str> = ordinal.split('.').collect();
    // Two levels max: "1" or "1.2", never "1.2.3".
    segments.len() <= 2
        && segments
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
}

/// Fills the distill-tags template. `path` falls back to the parent tag when
/// no chain exists yet.
pub fn build_distill_tags_prompt(
    template: &str,
    language: Language,
    params: &DistillTagsParams,
) -> String {
    let existing = if params.existing_tags.is_empty() {
        String::new()
    } else {
        match language {
            Language::Zh => format!(
                "已有的子标签包括：{}，请不要生成与这些重复的标签。",
                params.existing_tags.join("、")
            ),
            Language::En => format!(
                "Existing sub-tags include: {}, please do not generate duplicate tags.",
                params.existing_tags.join(", ")
            ),
        }
    };
    let path = if params.tag_path.is_empty() {
        &params.parent_tag
    } else {
        &params.tag_path
    };

    render(
        template,
        &PlaceholderSet::new()
            .set("parentTag", &params.parent_tag)
            .set("count", params.count)
            .set("path", path)
            .set("existingTagsText", existing),
    )
}

/// Validates a parsed distillation response: a JSON array of labels, every
/// label matching the ordinal grammar, ordinals unique among these siblings.
pub fn validate_tag_labels(value: &Value) -> Result<Vec<String>, ValidationError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ValidationError::MalformedTagTree("expected a JSON array of labels".to_string()))?;

    let mut labels = Vec::with_capacity(entries.len());
    let mut seen_ordinals = Vec::new();
    for entry in entries {
        let label = entry.as_str().ok_or_else(|| {
            ValidationError::MalformedTagTree(format!("non-string label entry: {entry}"))
        })?;
        if !is_valid_tag_label(label) {
            return Err(ValidationError::MalformedTagTree(format!(
                "label {label:?} does not match \"<ordinal> <text>\""
            )));
        }
        let ordinal = label.split_once(' ').map(|(o, _)| o.to_string()).unwrap_or_default();
        if seen_ordinals.contains(&ordinal) {
            return Err(ValidationError::MalformedTagTree(format!(
                "duplicate sibling ordinal {ordinal}"
            )));
        }
        seen_ordinals.push(ordinal);
        labels.push(label.to_string());
    }
    Ok(labels)
}

/// Runs the distillation pipeline and returns the validated labels.
pub async fn distill_tags(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    params: &DistillTagsParams,
) -> Result<Vec<String>, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::DistillTag,
        DISTILL_TAGS_KEY,
        language,
        distill_tags_template(language),
    )
    .await;

    let prompt = build_distill_tags_prompt(&template, language, params);
    let raw = llm.invoke(&prompt, model).await?;
    let parsed = extract_structured(&raw)?;
    let labels = validate_tag_labels(&parsed)?;

    info!(
        "Distilled {} sub-tags under {}",
        labels.len(),
        params.parent_tag
    );
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_leading_ordinal() {
        assert_eq!(strip_leading_ordinal("1 汽车"), "汽车");
        assert_eq!(strip_leading_ordinal("1.2 足球"), "足球");
        assert_eq!(strip_leading_ordinal("汽车"), "汽车");
        assert_eq!(strip_leading_ordinal("Car Brands"), "Car Brands");
    }

    #[test]
    fn test_label_shape_accepts_one_and_two_level_ordinals() {
        assert!(is_valid_tag_label("1 汽车品牌"));
        assert!(is_valid_tag_label("1.1 汽车品牌"));
        assert!(is_valid_tag_label("12.3 Car Brands"));
    }

    #[test]
    fn test_label_shape_rejects_missing_ordinal() {
        assert!(!is_valid_tag_label("Automobiles"));
        assert!(!is_valid_tag_label("品牌"));
    }

    #[test]
    fn test_label_shape_rejects_three_level_ordinal() {
        assert!(!is_valid_tag_label("1.1.1 过深"));
    }

    #[test]
    fn test_label_shape_rejects_degenerate_forms() {
        assert!(!is_valid_tag_label("1. 空段"));
        assert!(!is_valid_tag_label("a.1 非数字"));
        assert!(!is_valid_tag_label("1   "));
    }

    #[test]
    fn test_build_prompt_path_falls_back_to_parent() {
        let params = DistillTagsParams::new(String::new(), "汽车".to_string());
        let prompt = build_distill_tags_prompt(distill_tags_template(Language::Zh), Language::Zh, &params);
        assert!(prompt.contains("标签完整链路是：汽车"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_build_prompt_lists_existing_tags() {
        let mut params = DistillTagsParams::new("知识库->体育".to_string(), "体育".to_string());
        params.existing_tags = vec!["1 足球".to_string(), "2 乒乓球".to_string()];
        let prompt = build_distill_tags_prompt(distill_tags_template(Language::Zh), Language::Zh, &params);
        assert!(prompt.contains("已有的子标签包括：1 足球、2 乒乓球"));
    }

    #[test]
    fn test_build_prompt_en_leaves_no_tokens() {
        let params = DistillTagsParams::new("Library->Sports".to_string(), "Sports".to_string());
        let prompt = build_distill_tags_prompt(distill_tags_template(Language::En), Language::En, &params);
        assert!(!prompt.contains("{{"), "unresolved token in: {prompt}");
    }

    #[test]
    fn test_validate_accepts_numbered_labels() {
        let labels = validate_tag_labels(&json!(["1 汽车品牌", "2 汽车型号"])).unwrap();
        assert_eq!(labels, vec!["1 汽车品牌", "2 汽车型号"]);
    }

    #[test]
    fn test_validate_scenario_d_unnumbered_label_fails() {
        let err = validate_tag_labels(&json!(["1 Car Brands", "Automobiles"])).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }

    #[test]
    fn test_validate_duplicate_sibling_ordinal_fails() {
        let err = validate_tag_labels(&json!(["1.1 品牌", "1.1 型号"])).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }

    #[test]
    fn test_validate_non_array_fails() {
        let err = validate_tag_labels(&json!({"labels": []})).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }
}
