pub mod config;
pub mod output_config;
pub mod request_defaults;
pub mod service_config;
