use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::extract::ParseError;
use crate::llm_client::LlmError;

/// Invariant violations detected while validating a parsed model response.
///
/// These are terminal for the current invocation: the caller surfaces them
/// with a retry action, the pipeline never retries on its own.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("score {score} is not a number in the 0-5 range")]
    InvalidScore { score: f64 },

    #[error("evaluation conclusion is missing or empty")]
    MissingEvaluation,

    #[error("expected at least {expected} usable questions, got {got}")]
    InsufficientQuestions { expected: usize, got: usize },

    #[error("malformed tag tree: {0}")]
    MalformedTagTree(String),

    #[error("malformed genre/audience pairs: {0}")]
    MalformedGAPairs(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Response parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Result validation error: {0}")]
    InvalidResult(#[from] ValidationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "The model call failed".to_string(),
                )
            }
            AppError::Parse(e) => {
                tracing::warn!("Model response unparseable: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PARSE_ERROR",
                    "The model response contained no usable JSON — retry the request".to_string(),
                )
            }
            AppError::InvalidResult(e) => {
                tracing::warn!("Model result rejected: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_RESULT",
                    format!("The model result failed validation: {e} — retry the request"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
