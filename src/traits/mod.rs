pub mod analysis_service;
pub mod notifier;
