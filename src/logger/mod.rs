pub mod analysis_spinner;
pub mod notice_logger;
pub mod report_printer;
