use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "securescan";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const ANALYZE_ENDPOINT: &str = "scan/analyze";
pub const HEALTH_ENDPOINT: &str = "scan/health";

pub const DEFAULT_APP_TYPE: &str = "Web Application";
pub const DEFAULT_TECH_STACK: &str = "JavaScript, Node.js, Database";
pub const DEFAULT_ENVIRONMENT: &str = "Production";

pub const ANALYSIS_INSTRUCTION: &str = "Analyze this code for security vulnerabilities:";

pub const DEFAULT_INPUT: &str = r#"const user = await db.query("SELECT * FROM users WHERE id = " + userId);"#;

pub const FALLBACK_TITLE: &str = "Security Analysis";
pub const SCORE_NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_SEVERITY: &str = "unknown";

pub const CVSS_CRITICAL_THRESHOLD: f64 = 9.0;
pub const CVSS_HIGH_THRESHOLD: f64 = 7.0;
pub const CVSS_MEDIUM_THRESHOLD: f64 = 4.0;

pub const NOTICE_EMPTY_TITLE: &str = "No code provided";
pub const NOTICE_EMPTY_DESCRIPTION: &str = "Please paste some code to analyze";
pub const NOTICE_COMPLETE_TITLE: &str = "Analysis Complete";
pub const NOTICE_FAILED_TITLE: &str = "Analysis Failed";
pub const NOTICE_FAILED_GENERIC: &str = "Could not analyze the code";

pub const SPINNER_INTERVAL_MS: u64 = 150;
pub const REPORT_MAX_WIDTH: usize = 72;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
