//! Override Resolver — project-scoped template customizations.
//!
//! Overrides are written by the settings UI and read-only here. Resolution
//! never blocks prompt generation: a broken override store degrades to the
//! built-in default (the one absorbed failure in the whole pipeline).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::prompts::{Language, PromptType};

/// A project-scoped prompt customization row.
/// Invariant (enforced by the settings UI): at most one active override per
/// (project_id, prompt_type, prompt_key, language).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PromptOverride {
    pub id: Uuid,
    pub project_id: Uuid,
    pub prompt_type: String,
    pub prompt_key: String,
    pub language: String,
    pub content: String,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

/// Read-only collaborator contract for the override store.
#[async_trait]
pub trait OverrideStore: Send + Sync {
    async fn get_override(
        &self,
        project_id: Uuid,
        prompt_type: PromptType,
        prompt_key: &str,
        language: Language,
    ) -> anyhow::Result<Option<PromptOverride>>;
}

/// Production override store backed by the `custom_prompts` table.
pub struct PgOverrideStore {
    pool: PgPool,
}

impl PgOverrideStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OverrideStore for PgOverrideStore {
    async fn get_override(
        &self,
        project_id: Uuid,
        prompt_type: PromptType,
        prompt_key: &str,
        language: Language,
    ) -> anyhow::Result<Option<PromptOverride>> {
        let row = sqlx::query_as::<_, PromptOverride>(
            r#"
            SELECT * FROM custom_prompts
            WHERE project_id = $1 AND prompt_type = $2 AND prompt_key = $3 AND language = $4
            "#,
        )
        .bind(project_id)
        .bind(prompt_type.as_str())
        .bind(prompt_key)
        .bind(language.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

/// Resolves the template content for a key: an active, non-empty project
/// override wins; everything else (no project, no row, inactive, empty
/// content, lookup failure) falls back to `default_content`.
pub async fn resolve_template(
    store: &dyn OverrideStore,
    project_id: Option<Uuid>,
    prompt_type: PromptType,
    base_key: &str,
    language: Language,
    default_content: &str,
) -> String {
    let Some(project_id) = project_id else {
        return default_content.to_string();
    };

    let prompt_key = language.prompt_key(base_key);
    match store
        .get_override(project_id, prompt_type, &prompt_key, language)
        .await
    {
        Ok(Some(custom)) if custom.is_active && !custom.content.is_empty() => custom.content,
        Ok(_) => default_content.to_string(),
        Err(error) => {
            warn!("Prompt override lookup failed for {prompt_key}: {error:#} — using default");
            default_content.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixture store: either returns a canned row, nothing, or an error.
    enum FixtureStore {
        Hit(PromptOverride),
        Miss,
        Broken,
    }

    #[async_trait]
    impl OverrideStore for FixtureStore {
        async fn get_override(
            &self,
            _project_id: Uuid,
            _prompt_type: PromptType,
            _prompt_key: &str,
            _language: Language,
        ) -> anyhow::Result<Option<PromptOverride>> {
            match self {
                FixtureStore::Hit(row) => Ok(Some(row.clone())),
                FixtureStore::Miss => Ok(None),
                FixtureStore::Broken => Err(anyhow::anyhow!("connection refused")),
            }
        }
    }

    fn fixture_override(content: &str, is_active: bool) -> PromptOverride {
        PromptOverride {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            prompt_type: "question".to_string(),
            prompt_key: "QUESTION_PROMPT".to_string(),
            language: "zh-CN".to_string(),
            content: content.to_string(),
            is_active,
            updated_at: Utc::now(),
        }
    }

    const DEFAULT: &str = "default template {{text}}";

    #[tokio::test]
    async fn test_active_override_wins_verbatim() {
        let store = FixtureStore::Hit(fixture_override("custom template {{text}}", true));
        let resolved = resolve_template(
            &store,
            Some(Uuid::new_v4()),
            PromptType::Question,
            "QUESTION_PROMPT",
            Language::Zh,
            DEFAULT,
        )
        .await;
        assert_eq!(resolved, "custom template {{text}}");
    }

    #[tokio::test]
    async fn test_missing_override_falls_back_to_default() {
        let store = FixtureStore::Miss;
        let resolved = resolve_template(
            &store,
            Some(Uuid::new_v4()),
            PromptType::Question,
            "QUESTION_PROMPT",
            Language::Zh,
            DEFAULT,
        )
        .await;
        assert_eq!(resolved, DEFAULT);
    }

    #[tokio::test]
    async fn test_inactive_override_falls_back_to_default() {
        let store = FixtureStore::Hit(fixture_override("custom", false));
        let resolved = resolve_template(
            &store,
            Some(Uuid::new_v4()),
            PromptType::Question,
            "QUESTION_PROMPT",
            Language::Zh,
            DEFAULT,
        )
        .await;
        assert_eq!(resolved, DEFAULT);
    }

    #[tokio::test]
    async fn test_empty_override_content_falls_back_to_default() {
        let store = FixtureStore::Hit(fixture_override("", true));
        let resolved = resolve_template(
            &store,
            Some(Uuid::new_v4()),
            PromptType::Question,
            "QUESTION_PROMPT",
            Language::Zh,
            DEFAULT,
        )
        .await;
        assert_eq!(resolved, DEFAULT);
    }

    #[tokio::test]
    async fn test_no_project_skips_lookup_entirely() {
        // A broken store must not matter when no project is given.
        let store = FixtureStore::Broken;
        let resolved = resolve_template(
            &store,
            None,
            PromptType::Question,
            "QUESTION_PROMPT",
            Language::Zh,
            DEFAULT,
        )
        .await;
        assert_eq!(resolved, DEFAULT);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_swallowed_to_default() {
        let store = FixtureStore::Broken;
        let resolved = resolve_template(
            &store,
            Some(Uuid::new_v4()),
            PromptType::Question,
            "QUESTION_PROMPT",
            Language::En,
            DEFAULT,
        )
        .await;
        assert_eq!(resolved, DEFAULT);
    }
}
