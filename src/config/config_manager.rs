use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SecureScanError, SecureScanResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# SecureScan Configuration

[service]
# Base URL of the analysis backend
base_url = "http://localhost:8000"

# Per-request timeout enforced by the HTTP client (seconds)
timeout_secs = 60

# Environment variable holding a bearer token, if the backend requires one
# api_key_env = "SECURESCAN_API_KEY"

# Context attached to every analysis request
[request]
app_type = "Web Application"
tech_stack = "JavaScript, Node.js, Database"
environment = "Production"

[output]
# "pretty" or "json"
format = "pretty"

# Colour severity badges in pretty output
color = true

# Where status notices go: "console" or "log"
notices = "console"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn resolve_path(override_path: Option<&Path>) -> PathBuf {
        override_path.map_or_else(Self::default_path, Path::to_path_buf)
    }

    /// Loads the config at `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> SecureScanResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| SecureScanError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config(path: &Path, force: bool) -> SecureScanResult<()> {
        if path.exists() && !force {
            return Err(SecureScanError::config_error(
                &format!("config already exists at {}", path.display()),
                None,
                Some("Pass --force to overwrite it"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SecureScanError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| SecureScanError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = config.service.base_url.trim();
        if base_url.is_empty() {
            errors.push("service.base_url must not be empty".to_string());
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("service.base_url must start with http:// or https://: {base_url}"));
        }

        if config.service.timeout_secs == 0 {
            errors.push("service.timeout_secs must be greater than zero".to_string());
        }

        if let Some(name) = &config.service.api_key_env {
            if name.trim().is_empty() {
                errors.push("service.api_key_env must not be empty when set".to_string());
            }
        }

        for (field, value) in [
            ("request.app_type", &config.request.app_type),
            ("request.tech_stack", &config.request.tech_stack),
            ("request.environment", &config.request.environment),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{field} must not be empty"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
