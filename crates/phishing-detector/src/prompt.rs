use ai_common::inference::Message;

/// Fixed system role for every analysis request.
const SYSTEM_ROLE: &str = "You are a cybersecurity expert specializing in URL analysis.";

/// The two role-tagged messages for one analysis call.
pub fn messages(target: &str) -> Vec<Message> {
    vec![
        Message {
            role: "system".to_string(),
            content: SYSTEM_ROLE.to_string(),
        },
        Message {
            role: "user".to_string(),
            content: analysis_prompt(target),
        },
    ]
}

/// Instruction template sent with each target URL: the four phishing
/// heuristics the model should weigh, plus the exact JSON shape to answer
/// with.
fn analysis_prompt(target: &str) -> String {
    format!(
        r#"Analyze this URL: "{target}"

Identify if it shows signs of being a phishing attempt based on:
1. Suspicious domain structure (typosquatting, misleading names)
2. Unusual URL patterns (excessive subdomains, random strings)
3. Presence of brand names in unexpected domains
4. Deceptive paths or query parameters

Rate the phishing probability from 1-10 and explain your reasoning.
Format your response as JSON with fields:
{{
  "score": number,
  "risk_level": "low|medium|high",
  "reasoning": "string",
  "recommendations": "string"
}}"#
    )
}
