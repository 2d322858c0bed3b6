use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use ai_common::inference::InferenceError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// A collaborator failure surfaces as a plain-text 500 carrying the
/// failure description. Parse failures never take this path; they degrade
/// to the fallback assessment inside the handler.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "analysis failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error analyzing URL: {self}"),
        )
            .into_response()
    }
}
