use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The structured report displayed to the user, from the service or the fallback.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_fix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub immediate_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_scenario: Option<String>,
}

impl AnalysisResult {
    /// Builds a result from an untrusted `data` payload.
    ///
    /// Every field is optional on its own: a field with the wrong type is
    /// treated as absent rather than failing the whole payload. Both
    /// `snake_case` and `camelCase` keys are accepted. Returns `None` only
    /// when the payload is not a JSON object.
    pub fn from_value(data: &Value) -> Option<Self> {
        let object = data.as_object()?;
        let field = |snake: &str, camel: &str| object.get(snake).or_else(|| object.get(camel));

        Some(Self {
            severity: field("severity", "severity").and_then(string_field),
            title: field("title", "title").and_then(string_field),
            cvss_score: field("cvss_score", "cvssScore").and_then(score_field),
            ai_analysis: field("ai_analysis", "aiAnalysis").and_then(AiAnalysis::from_value),
        })
    }

    /// Canned finding shown whenever a real analysis could not be obtained.
    pub fn fallback() -> Self {
        Self {
            severity: Some("HIGH".to_string()),
            title: Some("SQL Injection Vulnerability".to_string()),
            cvss_score: Some(8.5),
            ai_analysis: Some(AiAnalysis {
                secure_fix: Some(
                    r#"Use parameterized queries: const user = await db.query("SELECT * FROM users WHERE id = ?", [userId]);"#
                        .to_string(),
                ),
                immediate_actions: vec![
                    "Replace string concatenation with parameterized query".to_string(),
                    "Add input validation for userId parameter".to_string(),
                    "Review database permissions".to_string(),
                ],
                risk_explanation: Some(
                    "User input is directly concatenated into SQL query without sanitization, allowing attackers to execute arbitrary SQL commands."
                        .to_string(),
                ),
                attack_scenario: None,
            }),
        }
    }
}

impl AiAnalysis {
    fn from_value(data: &Value) -> Option<Self> {
        let object = data.as_object()?;
        let field = |snake: &str, camel: &str| object.get(snake).or_else(|| object.get(camel));

        let immediate_actions = field("immediate_actions", "immediateActions")
            .and_then(Value::as_array)
            .map(|actions| {
                actions
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            secure_fix: field("secure_fix", "secureFix").and_then(string_field),
            immediate_actions,
            risk_explanation: field("risk_explanation", "riskExplanation").and_then(string_field),
            attack_scenario: field("attack_scenario", "attackScenario").and_then(string_field),
        })
    }
}

fn string_field(value: &Value) -> Option<String> {
    value.as_str().map(ToString::to_string)
}

fn score_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|score| score.is_finite())
}
