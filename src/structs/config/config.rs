use serde::{Deserialize, Serialize};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::request_defaults::RequestDefaults;
use crate::structs::config::service_config::ServiceConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub request: RequestDefaults,

    #[serde(default)]
    pub output: OutputConfig,
}
