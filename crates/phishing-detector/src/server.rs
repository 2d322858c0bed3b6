use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{info, warn};

use ai_common::inference::Inference;

use crate::error::AppError;
use crate::extract;
use crate::model::Assessment;
use crate::prompt;
use crate::render;

#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<dyn Inference>,
}

/// Form body for the analyze endpoint. A missing `url` field analyzes the
/// empty string.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub url: String,
}

/// GET serves the form and POST runs an analysis, on every path; the
/// method router answers anything else with 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(analyze))
        .route("/{*path}", get(index).post(analyze))
        .layer(middleware::from_fn(log_http_request))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(render::INDEX_HTML)
}

/// The whole pipeline for one submitted URL: prompt, one inference round
/// trip, extraction (degrading to the fallback assessment), HTML report.
async fn analyze(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Html<String>, AppError> {
    let target = form.url;
    info!(url = %target, "analysis requested");

    let reply = state.ai.run(&prompt::messages(&target)).await?;

    let assessment = match extract::extract_assessment(&reply) {
        Ok(assessment) => assessment,
        Err(e) => {
            warn!(error = %e, "model reply carried no parseable assessment, using fallback");
            Assessment::fallback(&reply)
        }
    };
    info!(
        url = %target,
        score = assessment.score,
        risk_level = assessment.risk_level.css_class(),
        "analysis rendered"
    );

    Ok(Html(render::report_page(&target, &assessment)))
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        "http request"
    );
    response
}
