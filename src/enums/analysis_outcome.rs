use crate::enums::service_error::ServiceError;
use crate::structs::analysis_result::AnalysisResult;

/// How a single trigger of the orchestrator settled.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Another request was already in flight; nothing happened.
    Busy,
    /// Input was empty after trimming; the service was not called.
    EmptyInput,
    Completed(AnalysisResult),
    /// The service failed and the canned result is displayed instead.
    Fallback {
        result: AnalysisResult,
        error: ServiceError,
    },
}

impl AnalysisOutcome {
    pub const fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Completed(result) | Self::Fallback { result, .. } => Some(result),
            Self::Busy | Self::EmptyInput => None,
        }
    }

    pub const fn error(&self) -> Option<&ServiceError> {
        match self {
            Self::Fallback { error, .. } => Some(error),
            _ => None,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::EmptyInput => "empty_input",
            Self::Completed(_) => "completed",
            Self::Fallback { .. } => "fallback",
        }
    }
}
