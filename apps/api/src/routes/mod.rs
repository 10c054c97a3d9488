pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{datasets, ga, prompts, questions, tags};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dataset curation
        .route(
            "/api/projects/:project_id/datasets/:dataset_id/evaluate",
            post(datasets::handlers::handle_evaluate),
        )
        .route(
            "/api/projects/:project_id/chunks/:chunk_id/clean",
            post(datasets::handlers::handle_clean_chunk),
        )
        // Question generation
        .route(
            "/api/projects/:project_id/questions/generate",
            post(questions::handlers::handle_generate_questions),
        )
        .route(
            "/api/projects/:project_id/distill/questions",
            post(questions::handlers::handle_distill_questions),
        )
        // Domain tag tree
        .route(
            "/api/projects/:project_id/distill/tags",
            post(tags::handlers::handle_distill_tags),
        )
        .route(
            "/api/projects/:project_id/tags/revise",
            post(tags::handlers::handle_revise_tags),
        )
        // Genre/audience pairs
        .route(
            "/api/projects/:project_id/ga/generate",
            post(ga::handlers::handle_generate_ga),
        )
        // Prompt settings
        .route(
            "/api/projects/:project_id/prompts/:prompt_type/:base_key",
            get(prompts::handlers::handle_get_template),
        )
        .with_state(state)
}
