use serde::{Deserialize, Serialize};
use crate::config::constants::ANALYSIS_INSTRUCTION;
use crate::structs::config::request_defaults::RequestDefaults;

/// Payload sent to the analysis service. Built fresh for every trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub issue: String,
    pub app_type: String,
    pub tech_stack: String,
    pub environment: String,
}

impl AnalysisRequest {
    pub fn for_code(code: &str, defaults: &RequestDefaults) -> Self {
        Self {
            issue: format!("{ANALYSIS_INSTRUCTION}\n\n{code}"),
            app_type: defaults.app_type.clone(),
            tech_stack: defaults.tech_stack.clone(),
            environment: defaults.environment.clone(),
        }
    }
}
