//! Prompt templating core: template identity, the built-in registry, the
//! placeholder engine, and the project-override resolver.
//!
//! Defaults are immutable constants owned by the use-case modules; this
//! module only maps a `(promptType, key, language)` triple onto them. No
//! process-wide mutable state anywhere.

pub mod handlers;
pub mod overrides;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::datasets;
use crate::ga;
use crate::questions;
use crate::tags;

/// Prompt language. The English variant of a base key `K` is stored under
/// `K_EN`; Chinese uses the base key itself (original storage convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    /// Storage form used by the override table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en",
        }
    }

    /// Full prompt key for a base key in this language.
    pub fn prompt_key(&self, base_key: &str) -> String {
        match self {
            Language::Zh => base_key.to_string(),
            Language::En => format!("{base_key}_EN"),
        }
    }
}

/// The prompt families the pipeline knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PromptType {
    DatasetEvaluation,
    Question,
    DistillQuestion,
    DistillTag,
    LabelRevise,
    GaGeneration,
    DataClean,
}

impl PromptType {
    /// Storage form used by the override table.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::DatasetEvaluation => "datasetEvaluation",
            PromptType::Question => "question",
            PromptType::DistillQuestion => "distillQuestion",
            PromptType::DistillTag => "distillTag",
            PromptType::LabelRevise => "labelRevise",
            PromptType::GaGeneration => "gaGeneration",
            PromptType::DataClean => "dataClean",
        }
    }
}

/// Looks up the built-in default for a `(promptType, key, language)` triple.
/// A triple identifies exactly one default template and at most one override.
/// Returns `None` for keys the registry does not own.
pub fn default_template(
    prompt_type: PromptType,
    base_key: &str,
    language: Language,
) -> Option<&'static str> {
    match (prompt_type, base_key) {
        (PromptType::DatasetEvaluation, datasets::prompts::DATASET_EVALUATION_KEY) => {
            Some(datasets::prompts::evaluation_template(language))
        }
        (PromptType::DataClean, datasets::prompts::DATA_CLEAN_KEY) => {
            Some(datasets::prompts::data_clean_template(language))
        }
        (PromptType::Question, questions::prompts::QUESTION_KEY) => {
            Some(questions::prompts::question_template(language))
        }
        (PromptType::Question, questions::prompts::GA_QUESTION_KEY) => {
            Some(questions::prompts::ga_question_template(language))
        }
        (PromptType::DistillQuestion, questions::prompts::DISTILL_QUESTIONS_KEY) => {
            Some(questions::prompts::distill_questions_template(language))
        }
        (PromptType::DistillTag, tags::prompts::DISTILL_TAGS_KEY) => {
            Some(tags::prompts::distill_tags_template(language))
        }
        (PromptType::LabelRevise, tags::prompts::LABEL_REVISE_KEY) => {
            Some(tags::prompts::label_revise_template(language))
        }
        (PromptType::GaGeneration, ga::prompts::GA_GENERATION_KEY) => {
            Some(ga::prompts::ga_generation_template(language))
        }
        _ => None,
    }
}
