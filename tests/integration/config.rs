use securescan::config::config_manager::ConfigManager;
use securescan::enums::output_format::OutputFormat;
use securescan::structs::config::config::Config;
use tempfile::TempDir;

#[test]
fn init_writes_a_loadable_sample_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigManager::create_sample_config(&path, false).unwrap();
    let config = ConfigManager::load(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(ConfigManager::validate_config(&config).is_ok());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    assert!(ConfigManager::create_sample_config(&path, false).is_err());
    assert_eq!(ConfigManager::load(&path).unwrap().output.format, OutputFormat::Json);

    ConfigManager::create_sample_config(&path, true).unwrap();
    assert_eq!(ConfigManager::load(&path).unwrap().output.format, OutputFormat::Pretty);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.request.app_type, "Web Application");
    assert_eq!(config.service.base_url, "http://localhost:8000");
}

#[test]
fn broken_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[service\nbase_url = ").unwrap();

    assert!(ConfigManager::load(&path).is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.request.environment = "Staging".to_string();
    config.service.api_key_env = Some("SECURESCAN_API_KEY".to_string());

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    assert_eq!(ConfigManager::load(&path).unwrap(), config);
}
