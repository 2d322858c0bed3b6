use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// A role-tagged chat message sent to the inference API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("config error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("upstream returned non-JSON error: status={status} body={body}")]
    UpstreamBody { status: StatusCode, body: String },

    #[error("inference API rejected the request: {0}")]
    Rejected(String),

    #[error("inference API returned no completion text")]
    MissingReply,

    #[error("inference failed: {0}")]
    Failed(String),
}

/// The hosted inference collaborator: one opaque remote call turning
/// role-tagged messages into a text completion. Which model answers and
/// where it lives belongs to the implementation, not the caller.
#[async_trait]
pub trait Inference: Send + Sync {
    async fn run(&self, messages: &[Message]) -> Result<String, InferenceError>;
}
