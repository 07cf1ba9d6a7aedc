pub mod analysis_outcome;
pub mod analysis_phase;
pub mod badge_style;
pub mod commands;
pub mod cvss_bucket;
pub mod notice_variant;
pub mod output_format;
pub mod preset_code;
pub mod service_error;
pub mod severity;
