use crate::config::constants::FALLBACK_TITLE;
use crate::services::severity_classifier::SeverityClassifier;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::report::{Report, ReportHeader, ReportSection, ScoreBlock};

pub struct ReportRenderer;

impl ReportRenderer {
    /// Projects the current result into display blocks.
    ///
    /// Returns `None` while results are hidden. Every block other than the
    /// header and score is optional and is simply left out when its field is
    /// missing or empty.
    pub fn render(result: &AnalysisResult, results_visible: bool) -> Option<Report> {
        if !results_visible {
            return None;
        }

        let header = ReportHeader {
            badge: SeverityClassifier::classify(result.severity.as_deref()),
            title: non_empty(result.title.as_ref()).unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        };

        let score = ScoreBlock {
            score: result.cvss_score,
            bucket: result.cvss_score.map(SeverityClassifier::cvss_bucket),
        };

        Some(Report {
            header,
            score,
            sections: Self::sections(result),
        })
    }

    fn sections(result: &AnalysisResult) -> Vec<ReportSection> {
        let Some(analysis) = result.ai_analysis.as_ref() else {
            return Vec::new();
        };

        let mut sections = Vec::new();

        if let Some(text) = non_empty(analysis.risk_explanation.as_ref()) {
            sections.push(ReportSection::RiskExplanation(text));
        }
        if let Some(fix) = non_empty(analysis.secure_fix.as_ref()) {
            sections.push(ReportSection::SecureFix(fix));
        }
        if !analysis.immediate_actions.is_empty() {
            sections.push(ReportSection::ImmediateActions(analysis.immediate_actions.clone()));
        }
        if let Some(scenario) = non_empty(analysis.attack_scenario.as_ref()) {
            sections.push(ReportSection::AttackScenario(scenario));
        }

        sections
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|text| !text.is_empty()).cloned()
}
