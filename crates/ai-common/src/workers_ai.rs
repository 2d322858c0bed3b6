use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::inference::{Inference, InferenceError, Message};

const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
const DEFAULT_MODEL: &str = "@hf/thebloke/deepseek-coder-6.7b-base-awq";

#[derive(Clone, Debug)]
pub struct WorkersAiConfig {
    pub base_url: String,
    pub account_id: String,
    pub api_token: String,
    pub model: String,
    pub request_timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl WorkersAiConfig {
    /// Required:
    /// - `WORKERS_AI_ACCOUNT_ID`
    /// - `WORKERS_AI_API_TOKEN`
    ///
    /// Optional:
    /// - `WORKERS_AI_BASE_URL` (default: the public Cloudflare API)
    /// - `WORKERS_AI_MODEL` (default: `@hf/thebloke/deepseek-coder-6.7b-base-awq`)
    /// - `WORKERS_AI_TIMEOUT_SECS` (default: 30)
    /// - `WORKERS_AI_MAX_ERROR_BODY_BYTES` (default: 8192)
    pub fn from_env() -> Result<Self, InferenceError> {
        let account_id = std::env::var("WORKERS_AI_ACCOUNT_ID").map_err(|_| {
            InferenceError::Config(
                "WORKERS_AI_ACCOUNT_ID environment variable is required".to_string(),
            )
        })?;

        let api_token = std::env::var("WORKERS_AI_API_TOKEN").map_err(|_| {
            InferenceError::Config(
                "WORKERS_AI_API_TOKEN environment variable is required".to_string(),
            )
        })?;

        let base_url =
            std::env::var("WORKERS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model =
            std::env::var("WORKERS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let request_timeout = std::env::var("WORKERS_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let max_error_body_bytes = std::env::var("WORKERS_AI_MAX_ERROR_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(8 * 1024);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id,
            api_token,
            model,
            request_timeout,
            max_error_body_bytes,
        })
    }
}

/// Client for the Cloudflare Workers AI REST API. One POST per analysis,
/// no retries: a failed call is the caller's problem immediately.
#[derive(Clone)]
pub struct WorkersAiClient {
    config: WorkersAiConfig,
    http: reqwest::Client,
}

impl WorkersAiClient {
    pub fn new(config: WorkersAiConfig) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .user_agent("phishing-detector")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &WorkersAiConfig {
        &self.config
    }

    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.config.base_url, self.config.account_id, self.config.model
        )
    }
}

#[async_trait]
impl Inference for WorkersAiClient {
    async fn run(&self, messages: &[Message]) -> Result<String, InferenceError> {
        let resp = self
            .http
            .post(self.run_url())
            .bearer_auth(&self.config.api_token)
            .timeout(self.config.request_timeout)
            .json(&RunRequest { messages })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(to_upstream_error(resp, self.config.max_error_body_bytes).await);
        }

        let body = resp.text().await?;
        let envelope: RunEnvelope = serde_json::from_str(&body)?;
        reply_from_envelope(envelope)
    }
}

fn reply_from_envelope(envelope: RunEnvelope) -> Result<String, InferenceError> {
    if !envelope.success {
        return Err(InferenceError::Rejected(first_error_message(
            envelope.errors,
        )));
    }
    envelope
        .result
        .and_then(|r| r.response)
        .ok_or(InferenceError::MissingReply)
}

async fn to_upstream_error(resp: reqwest::Response, max_body_bytes: usize) -> InferenceError {
    let status = resp.status();
    let body = read_limited_text(resp, max_body_bytes).await;
    if let Ok(envelope) = serde_json::from_str::<RunEnvelope>(&body) {
        if !envelope.errors.is_empty() {
            return InferenceError::Upstream {
                status,
                message: first_error_message(envelope.errors),
            };
        }
    }
    InferenceError::UpstreamBody { status, body }
}

fn first_error_message(errors: Vec<ApiError>) -> String {
    errors
        .into_iter()
        .filter_map(|e| e.message)
        .next()
        .unwrap_or_else(|| "unknown API error".to_string())
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read upstream error body");
            "<failed to read error body>".to_string()
        }
    }
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    result: Option<RunResult>,
    success: bool,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[allow(dead_code)]
    code: Option<i64>,
    message: Option<String>,
}
