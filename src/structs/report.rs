use serde::Serialize;
use crate::config::constants::SCORE_NOT_AVAILABLE;
use crate::enums::cvss_bucket::CvssBucket;
use crate::structs::severity_badge::SeverityBadge;

/// Display-ready projection of an [`AnalysisResult`](crate::structs::analysis_result::AnalysisResult).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub header: ReportHeader,
    pub score: ScoreBlock,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub badge: SeverityBadge,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBlock {
    pub score: Option<f64>,
    pub bucket: Option<CvssBucket>,
}

impl ScoreBlock {
    pub fn score_text(&self) -> String {
        self.score
            .map_or_else(|| SCORE_NOT_AVAILABLE.to_string(), |score| score.to_string())
    }

    /// `"3.2 (Low)"`, or plain `"N/A"` without a score.
    pub fn annotation(&self) -> String {
        match self.bucket {
            Some(bucket) => format!("{} ({})", self.score_text(), bucket),
            None => self.score_text(),
        }
    }
}

/// Optional report blocks, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ReportSection {
    RiskExplanation(String),
    SecureFix(String),
    ImmediateActions(Vec<String>),
    AttackScenario(String),
}

/// Machine-readable output of a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutput {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub report: Report,
}
