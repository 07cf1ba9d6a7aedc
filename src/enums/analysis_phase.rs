use serde::{Deserialize, Serialize};

/// Externally visible lifecycle phase of the analyzer.
///
/// Input validation happens synchronously inside a trigger, so it never shows
/// up as a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPhase {
    Idle,
    Busy,
    ResultsVisible,
}
