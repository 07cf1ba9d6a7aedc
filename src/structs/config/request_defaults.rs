use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Contextual metadata attached to every analysis request.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    #[serde(default = "ConfigHelper::default_app_type")]
    pub app_type: String,

    #[serde(default = "ConfigHelper::default_tech_stack")]
    pub tech_stack: String,

    #[serde(default = "ConfigHelper::default_environment")]
    pub environment: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            app_type: ConfigHelper::default_app_type(),
            tech_stack: ConfigHelper::default_tech_stack(),
            environment: ConfigHelper::default_environment(),
        }
    }
}
