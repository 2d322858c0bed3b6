use serde::{Deserialize, Serialize};

/// Risk grade for a submitted URL. The set is closed: deserialization
/// accepts only the three lowercase names, so any other value in a model
/// reply is a parse failure rather than text that reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// CSS class on the result card.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Uppercase label for the score line.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// One risk assessment, parsed from a model reply or built by
/// [`Assessment::fallback`]. Lives for a single request/response cycle;
/// nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub reasoning: String,
    pub recommendations: String,
}

impl Assessment {
    /// The fixed degraded assessment used when the reply carries no
    /// parseable JSON. Keeps the raw reply in `reasoning` so an operator
    /// can still see what the model said.
    pub fn fallback(raw_reply: &str) -> Self {
        Self {
            score: 5,
            risk_level: RiskLevel::Medium,
            reasoning: format!(
                "Could not parse structured analysis. Original response: {raw_reply}"
            ),
            recommendations: "Please review the URL manually.".to_string(),
        }
    }
}
