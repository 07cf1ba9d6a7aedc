pub mod analysis_request;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod notice;
pub mod preset;
pub mod report;
pub mod service_envelope;
pub mod severity_badge;
pub mod widget_state;
