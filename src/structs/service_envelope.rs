use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::service_error::ServiceError;
use crate::structs::analysis_result::AnalysisResult;

/// Response wrapper returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceEnvelope {
    pub fn succeeded(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub const fn failed() -> Self {
        Self {
            success: false,
            data: None,
            message: None,
        }
    }

    /// An explicit `success: false` is reported as [`ServiceError::Unsuccessful`]
    /// without any service-specific detail.
    pub fn into_result(self) -> Result<AnalysisResult, ServiceError> {
        if !self.success {
            return Err(ServiceError::Unsuccessful);
        }

        let data = self
            .data
            .ok_or_else(|| ServiceError::MalformedResponse("response did not include a result".to_string()))?;

        AnalysisResult::from_value(&data)
            .ok_or_else(|| ServiceError::MalformedResponse("result payload is not an object".to_string()))
    }
}
