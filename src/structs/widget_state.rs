use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::enums::analysis_phase::AnalysisPhase;
use crate::structs::analysis_result::AnalysisResult;

/// Snapshot of what the analyzer is currently displaying.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WidgetState {
    pub busy: bool,
    pub results_visible: bool,
    pub current: Option<AnalysisResult>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl WidgetState {
    pub const fn phase(&self) -> AnalysisPhase {
        if self.busy {
            AnalysisPhase::Busy
        } else if self.results_visible && self.current.is_some() {
            AnalysisPhase::ResultsVisible
        } else {
            AnalysisPhase::Idle
        }
    }
}
