use crate::model::Assessment;

/// Landing page: the submission form plus two example links. Static, no
/// interpolation.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
  <head>
    <title>Phishing URL Detector</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; }
      h1 { color: #333; }
      form { margin-top: 20px; }
      input[type="text"] { width: 100%; padding: 10px; font-size: 16px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
      button { background-color: #0051c3; color: white; border: none; padding: 10px 15px; font-size: 16px; border-radius: 4px; cursor: pointer; margin-top: 10px; }
      button:hover { background-color: #003da0; }
      .examples { margin-top: 30px; }
      .example { cursor: pointer; color: #0066cc; margin-right: 15px; }
      .example:hover { text-decoration: underline; }
    </style>
  </head>
  <body>
    <h1>Phishing URL Detector</h1>
    <p>Enter a URL to analyze for potential phishing indicators.</p>

    <form method="POST">
      <input type="text" name="url" placeholder="Enter URL to analyze" required>
      <button type="submit">Analyze URL</button>
    </form>

    <div class="examples">
      <p>Examples to try:</p>
      <span class="example">
        <a href="#" onclick="document.querySelector('input[name=url]').value='https://secure-bankofamerica.com.phishing.example/login'">
          Banking phishing example
        </a>
      </span>
      <span class="example">
        <a href="#" onclick="document.querySelector('input[name=url]').value='https://www.sherilnagoor.com'">
          Legitimate URL example
        </a>
      </span>
    </div>
  </body>
</html>
"##;

const REPORT_STYLE: &str = r#"
      body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; }
      .result { border: 1px solid #ddd; border-radius: 8px; padding: 20px; margin-top: 20px; }
      .high { border-left: 5px solid #ff4d4d; }
      .medium { border-left: 5px solid #ffcc00; }
      .low { border-left: 5px solid #66cc66; }
      h2 { margin-top: 0; }
      .score { font-size: 24px; font-weight: bold; }
      a.back { display: inline-block; margin-top: 20px; color: #0066cc; text-decoration: none; }
      a.back:hover { text-decoration: underline; }
"#;

/// Render the analysis report. Every interpolated string is escaped, and
/// the card's risk class comes from the closed enum, never from raw model
/// text.
pub fn report_page(target: &str, assessment: &Assessment) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Phishing URL Analysis</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>{style}    </style>
  </head>
  <body>
    <h1>Phishing URL Analysis</h1>
    <p>Analysis for: <code>{target}</code></p>

    <div class="result {risk_class}">
      <h2>Risk Assessment</h2>
      <p class="score">Score: {score}/10 ({risk_label} RISK)</p>
      <h3>Reasoning:</h3>
      <p>{reasoning}</p>
      <h3>Recommendations:</h3>
      <p>{recommendations}</p>
    </div>

    <a href="/" class="back">&larr; Analyze another URL</a>
  </body>
</html>
"#,
        style = REPORT_STYLE,
        target = escape_html(target),
        risk_class = assessment.risk_level.css_class(),
        score = assessment.score,
        risk_label = assessment.risk_level.label(),
        reasoning = escape_html(&assessment.reasoning),
        recommendations = escape_html(&assessment.recommendations),
    )
}

/// Escape text for interpolation into HTML element content or a
/// double-quoted attribute.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assessment, RiskLevel};

    fn sample(risk_level: RiskLevel, score: u8) -> Assessment {
        Assessment {
            score,
            risk_level,
            reasoning: "The domain nests a brand name under an unrelated TLD.".to_string(),
            recommendations: "Do not follow the link.".to_string(),
        }
    }

    #[test]
    fn report_carries_score_line_and_risk_class() {
        let page = report_page("https://example.com", &sample(RiskLevel::High, 9));
        assert!(page.contains("Score: 9/10 (HIGH RISK)"));
        assert!(page.contains(r#"<div class="result high">"#));
    }

    #[test]
    fn report_escapes_the_target_url() {
        let page = report_page(
            "https://example.com/<script>alert(1)</script>",
            &sample(RiskLevel::Low, 1),
        );
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn report_escapes_model_text() {
        let mut assessment = sample(RiskLevel::Medium, 5);
        assessment.reasoning = r#"beware "quotes" & <tags>"#.to_string();
        let page = report_page("https://example.com", &assessment);
        assert!(page.contains("beware &quot;quotes&quot; &amp; &lt;tags&gt;"));
    }

    #[test]
    fn fallback_report_embeds_the_raw_reply() {
        let fallback = Assessment::fallback("I could not decide, sorry.");
        let page = report_page("https://example.com", &fallback);
        assert!(page.contains("Score: 5/10 (MEDIUM RISK)"));
        assert!(page.contains("I could not decide, sorry."));
    }

    #[test]
    fn index_offers_form_and_examples() {
        assert!(INDEX_HTML.contains(r#"<form method="POST">"#));
        assert!(INDEX_HTML.contains(r#"name="url""#));
        assert!(INDEX_HTML.contains("Banking phishing example"));
        assert!(INDEX_HTML.contains("Legitimate URL example"));
        // the example anchors are hash links with inline input fillers
        assert!(INDEX_HTML.contains(r##"<a href="#" onclick="##));
        assert!(INDEX_HTML
            .contains("value='https://secure-bankofamerica.com.phishing.example/login'"));
        assert!(INDEX_HTML.contains("value='https://www.sherilnagoor.com'"));
    }

    #[test]
    fn escape_html_covers_the_dangerous_five() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
