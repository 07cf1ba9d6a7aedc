use crate::config::constants::{
    DEFAULT_APP_TYPE, DEFAULT_BASE_URL, DEFAULT_ENVIRONMENT, DEFAULT_TECH_STACK, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_app_type() -> String {
        DEFAULT_APP_TYPE.to_string()
    }

    pub fn default_tech_stack() -> String {
        DEFAULT_TECH_STACK.to_string()
    }

    pub fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }

    pub const fn default_color() -> bool {
        true
    }
}
