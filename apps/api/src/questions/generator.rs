//! Question generation — chunk-based generation with an optional
//! genre/audience framing, and tag-based distillation for distilled datasets.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, ValidationError};
use crate::llm_client::extract::extract_structured;
use crate::llm_client::{LlmClient, ModelConfig};
use crate::prompts::overrides::{resolve_template, OverrideStore};
use crate::prompts::render::{render, PlaceholderSet};
use crate::prompts::{Language, PromptType};
use crate::questions::prompts::{
    distill_questions_template, ga_question_template, question_template, DISTILL_QUESTIONS_KEY,
    QUESTION_KEY,
};
use crate::tags::distiller::strip_leading_ordinal;

/// One question per ~240 glyphs of source text when no count is requested.
const GLYPHS_PER_QUESTION: usize = 240;

/// Default question count for tag-based distillation.
const DEFAULT_DISTILL_COUNT: usize = 10;

/// Genre/audience framing for question generation. The sub-prompt is spliced
/// into the main template only for `Active`; `Inactive` renders every GA
/// placeholder to the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GaSelection {
    #[default]
    Inactive,
    Active { genre: String, audience: String },
}

/// Inputs for one chunk-based question generation prompt.
#[derive(Debug, Clone)]
pub struct QuestionParams {
    pub text: String,
    /// Requested question count; derived from text length when absent.
    pub number: Option<usize>,
    pub ga: GaSelection,
}

/// Inputs for one tag-based distillation prompt.
#[derive(Debug, Clone)]
pub struct DistillQuestionsParams {
    /// Full tag chain, e.g. "体育->足球->足球先生".
    pub tag_path: String,
    pub current_tag: String,
    pub count: usize,
    /// Already-generated questions the model must not repeat.
    pub existing_questions: Vec<String>,
}

/// The question count this request asks the model for (and the validation
/// minimum): explicit when supplied, `floor(glyphs / 240)` otherwise.
pub fn requested_count(params: &QuestionParams) -> usize {
    params
        .number
        .unwrap_or_else(|| params.text.chars().count() / GLYPHS_PER_QUESTION)
}

fn ga_fragments(language: Language, active: bool) -> (&'static str, &'static str) {
    if !active {
        return ("", "");
    }
    match language {
        Language::Zh => ("，并结合指定的体裁受众视角", "- 问题风格与指定的体裁受众匹配"),
        Language::En => (
            ", and incorporate the specified genre-audience perspective",
            "- Question style matches the specified genre and audience",
        ),
    }
}

/// Fills the question template, splicing in the GA sub-prompt when a pair is
/// active. Pure: both templates are resolved upstream.
pub fn build_question_prompt(
    template: &str,
    ga_template: &str,
    language: Language,
    params: &QuestionParams,
) -> String {
    let ga_block = match &params.ga {
        GaSelection::Inactive => String::new(),
        GaSelection::Active { genre, audience } => render(
            ga_template,
            &PlaceholderSet::new().set("genre", genre).set("audience", audience),
        ),
    };
    let (ga_note, ga_check) = ga_fragments(language, !ga_block.is_empty());

    render(
        template,
        &PlaceholderSet::new()
            .set("textLength", params.text.chars().count())
            .set("number", requested_count(params))
            .set("gaPrompt", &ga_block)
            .set("gaPromptNote", ga_note)
            .set("gaPromptCheck", ga_check)
            .set("text", &params.text),
    )
}

/// Fills the distillation template. The leading ordinal is stripped from the
/// current tag ("1.2 足球" prompts about "足球").
pub fn build_distill_questions_prompt(
    template: &str,
    language: Language,
    params: &DistillQuestionsParams,
) -> String {
    let existing = if params.existing_questions.is_empty() {
        String::new()
    } else {
        let listed = params
            .existing_questions
            .iter()
            .map(|q| format!("- {q}"))
            .collect::<Vec<_>>()
            .join("\n");
        match language {
            Language::Zh => {
                format!("已有的问题包括：\n{listed}\n请不要生成与这些重复或高度相似的问题。")
            }
            Language::En => format!(
                "Existing questions include: \n{listed}\nPlease do not generate duplicate or highly similar questions."
            ),
        }
    };

    render(
        template,
        &PlaceholderSet::new()
            .set("currentTag", strip_leading_ordinal(&params.current_tag))
            .set("count", params.count)
            .set("tagPath", &params.tag_path)
            .set("existingQuestions", existing),
    )
}

/// Validates a parsed question-generation response. Entries that are blank
/// after trimming never count toward the minimum; an under-count is an error
/// surfaced to the caller, not a silent truncation.
pub fn validate_question_set(
    value: &Value,
    minimum: usize,
) -> Result<Vec<String>, ValidationError> {
    let questions: Vec<String> = value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if questions.len() < minimum {
        return Err(ValidationError::InsufficientQuestions {
            expected: minimum,
            got: questions.len(),
        });
    }
    Ok(questions)
}

/// Runs the chunk-based generation pipeline:
/// resolve templates → build prompt → invoke → extract → validate.
pub async fn generate_questions(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    params: &QuestionParams,
) -> Result<Vec<String>, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::Question,
        QUESTION_KEY,
        language,
        question_template(language),
    )
    .await;
    // The GA sub-prompt is a built-in fragment, not project-customizable.
    let ga_template = ga_question_template(language);

    let prompt = build_question_prompt(&template, ga_template, language, params);
    let raw = llm.invoke(&prompt, model).await?;
    let parsed = extract_structured(&raw)?;
    let questions = validate_question_set(&parsed, requested_count(params))?;

    info!("Generated {} questions from chunk text", questions.len());
    Ok(questions)
}

/// Runs the tag-based distillation pipeline.
pub async fn distill_questions(
    llm: &LlmClient,
    overrides: &dyn OverrideStore,
    project_id: Option<Uuid>,
    language: Language,
    model: &ModelConfig,
    params: &DistillQuestionsParams,
) -> Result<Vec<String>, AppError> {
    let template = resolve_template(
        overrides,
        project_id,
        PromptType::DistillQuestion,
        DISTILL_QUESTIONS_KEY,
        language,
        distill_questions_template(language),
    )
    .await;

    let prompt = build_distill_questions_prompt(&template, language, params);
    let raw = llm.invoke(&prompt, model).await?;
    let parsed = extract_structured(&raw)?;
    let questions = validate_question_set(&parsed, params.count)?;

    info!(
        "Distilled {} questions for tag {}",
        questions.len(),
        params.current_tag
    );
    Ok(questions)
}

impl DistillQuestionsParams {
    pub fn new(tag_path: String, current_tag: String) -> Self {
        Self {
            tag_path,
            current_tag,
            count: DEFAULT_DISTILL_COUNT,
            existing_questions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(ga: GaSelection) -> QuestionParams {
        QuestionParams {
            text: "Rust 的所有权系统在编译期保证内存安全。".repeat(30),
            number: None,
            ga,
        }
    }

    #[test]
    fn test_requested_count_defaults_to_length_over_240() {
        let p = QuestionParams {
            text: "x".repeat(1000),
            number: None,
            ga: GaSelection::Inactive,
        };
        assert_eq!(requested_count(&p), 4);
    }

    #[test]
    fn test_requested_count_prefers_explicit_number() {
        let p = QuestionParams {
            text: "x".repeat(1000),
            number: Some(7),
            ga: GaSelection::Inactive,
        };
        assert_eq!(requested_count(&p), 7);
    }

    #[test]
    fn test_build_question_prompt_inactive_ga_leaves_no_tokens() {
        for language in [Language::Zh, Language::En] {
            let prompt = build_question_prompt(
                question_template(language),
                ga_question_template(language),
                language,
                &params(GaSelection::Inactive),
            );
            assert!(!prompt.contains("{{"), "unresolved token in {language:?} prompt");
            assert!(!prompt.contains("Target Genre"));
            assert!(!prompt.contains("目标体裁"));
        }
    }

    #[test]
    fn test_build_question_prompt_active_ga_splices_sub_prompt() {
        let prompt = build_question_prompt(
            question_template(Language::En),
            ga_question_template(Language::En),
            Language::En,
            &params(GaSelection::Active {
                genre: "Root Cause Analysis Type".to_string(),
                audience: "Aspiring Engineers".to_string(),
            }),
        );
        assert!(prompt.contains("**Target Genre**: Root Cause Analysis Type"));
        assert!(prompt.contains("**Target Audience**: Aspiring Engineers"));
        assert!(prompt.contains("genre-audience perspective"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_build_question_prompt_counts_glyphs() {
        let p = QuestionParams {
            text: "四个汉字".to_string(),
            number: Some(1),
            ga: GaSelection::Inactive,
        };
        let prompt = build_question_prompt(
            "长度：{{textLength}} 字，{{number}} 个\n{{gaPrompt}}{{gaPromptNote}}{{gaPromptCheck}}{{text}}",
            ga_question_template(Language::Zh),
            Language::Zh,
            &p,
        );
        assert!(prompt.contains("长度：4 字"));
    }

    #[test]
    fn test_build_distill_prompt_strips_leading_ordinal() {
        let p = DistillQuestionsParams {
            tag_path: "体育->足球".to_string(),
            current_tag: "1.2 足球".to_string(),
            count: 10,
            existing_questions: vec![],
        };
        let prompt =
            build_distill_questions_prompt(distill_questions_template(Language::Zh), Language::Zh, &p);
        assert!(prompt.contains("精通足球领域的知识"));
        assert!(!prompt.contains("1.2 足球领域"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_build_distill_prompt_lists_existing_questions() {
        let mut p = DistillQuestionsParams::new("体育".to_string(), "足球".to_string());
        p.existing_questions = vec!["什么是越位？".to_string(), "世界杯几年一届？".to_string()];
        let prompt =
            build_distill_questions_prompt(distill_questions_template(Language::Zh), Language::Zh, &p);
        assert!(prompt.contains("- 什么是越位？"));
        assert!(prompt.contains("请不要生成与这些重复或高度相似的问题。"));
    }

    #[test]
    fn test_build_distill_prompt_omits_existing_block_when_empty() {
        let p = DistillQuestionsParams::new("Sports".to_string(), "Football".to_string());
        let prompt =
            build_distill_questions_prompt(distill_questions_template(Language::En), Language::En, &p);
        assert!(!prompt.contains("Existing questions include"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_validate_accepts_full_set() {
        let questions = validate_question_set(&json!(["Q1?", "Q2?", "Q3?"]), 3).unwrap();
        assert_eq!(questions, vec!["Q1?", "Q2?", "Q3?"]);
    }

    #[test]
    fn test_validate_scenario_c_blank_entry_does_not_count() {
        let err = validate_question_set(&json!(["Q1?", "", "Q2?"]), 3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InsufficientQuestions {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_validate_trims_surviving_entries() {
        let questions = validate_question_set(&json!(["  Q1?  ", "Q2?"]), 2).unwrap();
        assert_eq!(questions, vec!["Q1?", "Q2?"]);
    }

    #[test]
    fn test_validate_non_string_entries_do_not_count() {
        let err = validate_question_set(&json!(["Q1?", 42, null]), 2).unwrap_err();
        assert!(matches!(err, ValidationError::InsufficientQuestions { got: 1, .. }));
    }

    #[test]
    fn test_validate_non_array_is_insufficient() {
        let err = validate_question_set(&json!({"questions": ["Q1?"]}), 1).unwrap_err();
        assert!(matches!(err, ValidationError::InsufficientQuestions { got: 0, .. }));
    }

    #[test]
    fn test_validate_surplus_is_accepted() {
        let questions = validate_question_set(&json!(["Q1?", "Q2?", "Q3?"]), 2).unwrap();
        assert_eq!(questions.len(), 3);
    }
}
