//! Client for an AI security-analysis backend.
//!
//! The [`AnalysisOrchestrator`](services::analysis_orchestrator::AnalysisOrchestrator)
//! drives one analysis per trigger against an [`AnalysisService`](traits::analysis_service::AnalysisService),
//! and [`ReportRenderer`](services::report_renderer::ReportRenderer) turns the result
//! into a severity-classified report.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
