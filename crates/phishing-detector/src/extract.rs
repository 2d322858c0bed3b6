use regex::Regex;

use crate::model::Assessment;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("model reply is not a valid assessment: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Locate and parse the JSON assessment embedded in a model reply.
///
/// Candidates are tried in order: the first ```json fenced block, then the
/// widest `{ ... }` span, then the reply as-is. A candidate that fails to
/// parse falls through to the next; the error from the final attempt is
/// what comes back when nothing parses.
pub fn extract_assessment(reply: &str) -> Result<Assessment, ExtractError> {
    if let Some(block) = fenced_json_block(reply) {
        if let Ok(assessment) = parse_candidate(block) {
            return Ok(assessment);
        }
    }
    if let Some(span) = brace_span(reply) {
        if let Ok(assessment) = parse_candidate(span) {
            return Ok(assessment);
        }
    }
    parse_candidate(reply)
}

/// Interior of the first fenced block labeled `json`, trimmed.
fn fenced_json_block(reply: &str) -> Option<&str> {
    let fence_re = Regex::new(r"(?s)```json(.*?)```").expect("valid regex");
    let caps = fence_re.captures(reply)?;
    Some(caps.get(1)?.as_str().trim())
}

/// Earliest `{` through the latest `}` in the reply.
fn brace_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

fn parse_candidate(candidate: &str) -> Result<Assessment, ExtractError> {
    Ok(serde_json::from_str(candidate)?)
}
