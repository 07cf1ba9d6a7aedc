pub mod analysis_orchestrator;
pub mod http_analysis_service;
pub mod input_capture;
pub mod report_renderer;
pub mod severity_classifier;
