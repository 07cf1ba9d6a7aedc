use serde::{Deserialize, Serialize};
use crate::enums::output_format::{NoticeSink, OutputFormat};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "ConfigHelper::default_color")]
    pub color: bool,

    #[serde(default)]
    pub notices: NoticeSink,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ConfigHelper::default_color(),
            notices: NoticeSink::default(),
        }
    }
}
