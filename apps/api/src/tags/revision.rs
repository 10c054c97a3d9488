//! Domain-tree revision — incrementally adapts the existing tag tree to
//! added or deleted literature and validates the revised tree shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, ValidationError};
use crate::llm_client::extract::extract_structured;
use crate::llm_client::{LlmClient, ModelConfig};
use crate::prompts::overrides::{resolve_template, OverrideStore};
use crate::prompts::render::{render, PlaceholderSet};
use crate::prompts::{Language, PromptType};
use crate::tags::distiller::is_valid_tag_label;
use crate::tags::prompts::{label_revise_template, LABEL_REVISE_KEY};

/// One node of the domain tree. `child` is the wire field name consumed by
/// the persistence sink — do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child: Vec<TagNode>,
}

/// Inputs for one tree-revision prompt.
#[derive(Debug, Clone)]
pub struct LabelReviseParams {
    /// Current domain tree.
    pub existing_tags: Vec<TagNode>,
    /// TOC overview of all literature currently in the project.
    pub toc: String,
    /// TOC of literature removed in this revision, if any.
    pub deleted_content: Option<String>,
    /// TOC of literature added in this revision, if any.
    pub new_content: Option<String>,
}

fn deleted_section(language: Language, content: &str) -> String {
    match language {
        Language::Zh => {
            format!("## 被删除的内容 \n 以下是本次要删除的文献目录信息：\n {content}")
        }
        Language::En => format!(
            "## Deleted Content \n Here are the table of contents from the deleted literature:\n {content}"
        ),
    }
}

fn new_section(language: Language, content: &str) -> String {
    match language {
        Language::Zh => {
            format!("## 新增的内容 \n 以下是本次新增的文献目录信息：\n {content}")
        }
        Language::En => format!(
            "## New Content \n Here are the table of contents from the newly added literature:\n {content}"
        ),
    }
}

/// Fills the revision template. The deleted/new sections collapse to empty
/// strings when the revision has no such content.
pub fn build_label_revise_prompt(
    template: &str,
    language: Language,
    params: &LabelReviseParams,
) -> Result<String, AppError> {
    let existing_tags = serde_json::to_string_pretty(&params.existing_tags)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize tag tree: {e}")))?;

    let deleted = params
        .deleted_content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| deleted_section(language, c))
        .unwrap_or_default();
    let added = params
        .new_content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| new_section(language, c))
        .unwrap_or_default();

    Ok(render(
        template,
        &PlaceholderSet::new()
            .set("existingTags", existing_tags)
            .set("text", &params.toc)
            .set("deletedContent", deleted)
            .set("newContent", added),
    ))
}

/// Validates a parsed revision response into a tag forest: every label must
/// match the ordinal grammar, sibling ordinals must be unique, and the tree
/// must not exceed two levels.
pub fn validate_tag_tree(value: &Value) -> Result<Vec<TagNode>, ValidationError> {
    let forest: Vec<TagNode> = serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::MalformedTagTree(format!("not a tag forest: {e}")))?;

    check_level(&forest, 1)?;
    Ok(forest)
}

fn check_level(nodes: &[TagNode], level: u8) -> Result<(), ValidationError> {
    let mut seen_ordinals = Vec::new();
    for node in nodes {
        if !is_valid_tag_label(&node.label) {
            return Err(ValidationError::MalformedTagTree(format!(
                "label {:?} does not match \"<ordinal> <text>\"",
                node.label
            )));
        }
        let ordinal = node
            .label
            .split_once(' ')
            .map(|(o, _)| o.to_string())
            .unwrap_or_default();
        if seen_ordinals.contains(&ordinal) {
            return Err(ValidationError::MalformedTagTree(format!(
                "duplicate sibling ordinal {ordinal}"
            )));
        }
        seen_ordinals.push(ordinal);

        if !node.child.is_empty() {
            if level >= 2 {
                return Err(ValidationError::MalformedTagTree(format!(
                    "node {:?} exceeds the two-level limit",
                    node.label
                )));
            }
            check_level(&node.child, level + 1)?;
        }
    }
    Ok(())
}

/// Runs the revision pipeline and returns the validated revised tree.
pub async fn revise_tag_tree(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    params: &LabelReviseParams,
) -> Result<Vec<TagNode>, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::LabelRevise,
        LABEL_REVISE_KEY,
        language,
        label_revise_template(language),
    )
    .await;

    let prompt = build_label_revise_prompt(&template, language, params)?;
    let raw = llm.invoke(&prompt, model).await?;
    let parsed = extract_structured(&raw)?;
    let forest = validate_tag_tree(&parsed)?;

    info!("Revised tag tree has {} root labels", forest.len());
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(label: &str) -> TagNode {
        TagNode {
            label: label.to_string(),
            child: vec![],
        }
    }

    fn params() -> LabelReviseParams {
        LabelReviseParams {
            existing_tags: vec![TagNode {
                label: "1 人工智能".to_string(),
                child: vec![leaf("1.1 机器学习")],
            }],
            toc: "第一章 绪论\n第二章 机器学习基础".to_string(),
            deleted_content: None,
            new_content: None,
        }
    }

    #[test]
    fn test_tag_node_serde_child_field() {
        let node: TagNode =
            serde_json::from_value(json!({"label": "1 领域", "child": [{"label": "1.1 子领域"}]}))
                .unwrap();
        assert_eq!(node.child.len(), 1);
        // Leaves deserialize without a child field and serialize without one.
        let round_tripped = serde_json::to_value(&node.child[0]).unwrap();
        assert_eq!(round_tripped, json!({"label": "1.1 子领域"}));
    }

    #[test]
    fn test_build_prompt_without_changes_leaves_no_tokens() {
        for language in [Language::Zh, Language::En] {
            let prompt =
                build_label_revise_prompt(label_revise_template(language), language, &params())
                    .unwrap();
            assert!(!prompt.contains("{{"), "unresolved token in {language:?} prompt");
            assert!(!prompt.contains("Deleted Content"));
            assert!(!prompt.contains("被删除的内容"));
        }
    }

    #[test]
    fn test_build_prompt_includes_change_sections() {
        let mut p = params();
        p.deleted_content = Some("第三章 旧内容".to_string());
        p.new_content = Some("第四章 新内容".to_string());
        let prompt =
            build_label_revise_prompt(label_revise_template(Language::Zh), Language::Zh, &p).unwrap();
        assert!(prompt.contains("## 被删除的内容"));
        assert!(prompt.contains("第三章 旧内容"));
        assert!(prompt.contains("## 新增的内容"));
        assert!(prompt.contains("第四章 新内容"));
    }

    #[test]
    fn test_build_prompt_embeds_pretty_tree_json() {
        let prompt =
            build_label_revise_prompt(label_revise_template(Language::Zh), Language::Zh, &params())
                .unwrap();
        assert!(prompt.contains(r#""label": "1 人工智能""#));
    }

    #[test]
    fn test_validate_accepts_two_level_tree() {
        let forest = validate_tag_tree(&json!([
            {"label": "1 一级", "child": [{"label": "1.1 二级"}, {"label": "1.2 另一个"}]},
            {"label": "2 无子标签"}
        ]))
        .unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].child.len(), 2);
    }

    #[test]
    fn test_validate_scenario_d_unnumbered_label_fails() {
        let err = validate_tag_tree(&json!([{"label": "Automobiles"}])).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }

    #[test]
    fn test_validate_third_level_fails() {
        let err = validate_tag_tree(&json!([
            {"label": "1 一级", "child": [
                {"label": "1.1 二级", "child": [{"label": "1.1.1 三级"}]}
            ]}
        ]))
        .unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }

    #[test]
    fn test_validate_duplicate_root_ordinals_fail() {
        let err = validate_tag_tree(&json!([{"label": "1 甲"}, {"label": "1 乙"}])).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }

    #[test]
    fn test_validate_non_forest_fails() {
        let err = validate_tag_tree(&json!({"label": "1 不是数组"})).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTagTree(_)));
    }
}
