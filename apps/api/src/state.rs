use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::prompts::overrides::OverrideStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable override store. Default: PgOverrideStore on `custom_prompts`.
    pub overrides: Arc<dyn OverrideStore>,
    /// Kept for handlers that need runtime settings beyond the collaborators.
    #[allow(dead_code)]
    pub config: Config,
}
