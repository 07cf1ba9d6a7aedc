use std::path::{Path, PathBuf};
use securescan::config::config_manager::ConfigManager;
use securescan::enums::commands::Commands;
use securescan::enums::preset_code::PresetCode;
use securescan::errors::SecureScanError;
use securescan::workers::command_runner::CommandRunner;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Base URL of a port that was bound and released, so nothing is listening.
async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base_url
}

fn write_config(dir: &TempDir, base_url: &str, timeout_secs: u64) -> PathBuf {
    let path = dir.path().join("config.toml");
    let content = format!(
        "[service]\nbase_url = \"{base_url}\"\ntimeout_secs = {timeout_secs}\n\n[output]\nformat = \"json\"\nnotices = \"log\"\n"
    );
    std::fs::write(&path, content).unwrap();
    path
}

fn analyze(code: &str) -> Commands {
    Commands::Analyze {
        code: Some(code.to_string()),
        file: None,
        preset: None,
        json: true,
    }
}

fn runner(path: &Path) -> CommandRunner {
    CommandRunner::new(Some(path.to_path_buf()))
}

#[tokio::test]
async fn analyze_succeeds_with_fallback_when_backend_is_down() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 5);

    let result = runner(&path).run_command(analyze("SELECT 1")).await;

    assert!(result.is_ok(), "fallback run should succeed: {result:?}");
}

#[tokio::test]
async fn analyze_preset_succeeds_with_fallback() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 5);
    let command = Commands::Analyze {
        code: None,
        file: None,
        preset: Some(PresetCode::HardcodedSecret),
        json: true,
    };

    assert!(runner(&path).run_command(command).await.is_ok());
}

#[tokio::test]
async fn analyze_rejects_blank_input() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 5);

    let error = runner(&path).run_command(analyze("   ")).await.unwrap_err();

    assert!(matches!(error, SecureScanError::UserInputError { .. }));
}

#[tokio::test]
async fn analyze_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 0);

    let error = runner(&path).run_command(analyze("SELECT 1")).await.unwrap_err();

    assert!(matches!(error, SecureScanError::ConfigurationError { ref message, .. } if message.contains("timeout_secs")));
}

#[tokio::test]
async fn analyze_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 5);
    let snippet = dir.path().join("snippet.js");
    std::fs::write(&snippet, "eval(userInput)").unwrap();
    let command = Commands::Analyze {
        code: None,
        file: Some(snippet),
        preset: None,
        json: true,
    };

    assert!(runner(&path).run_command(command).await.is_ok());
}

#[tokio::test]
async fn analyze_reports_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 5);
    let command = Commands::Analyze {
        code: None,
        file: Some(dir.path().join("absent.js")),
        preset: None,
        json: true,
    };

    let error = runner(&path).run_command(command).await.unwrap_err();

    assert!(matches!(error, SecureScanError::FileOperationError { .. }));
}

#[tokio::test]
async fn health_fails_when_backend_is_down() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &unreachable_base_url().await, 5);

    let error = runner(&path).run_command(Commands::Health).await.unwrap_err();

    assert!(matches!(error, SecureScanError::NetworkError { .. }));
    assert!(error.is_recoverable());
}

#[tokio::test]
async fn init_then_validate_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("securescan").join("config.toml");
    let mut runner = runner(&path);

    runner.run_command(Commands::Init { force: false }).await.unwrap();
    assert!(path.exists());
    assert!(runner.run_command(Commands::Validate).await.is_ok());
    assert!(runner.run_command(Commands::Init { force: false }).await.is_err());
    assert!(runner.run_command(Commands::Init { force: true }).await.is_ok());
    assert!(ConfigManager::load(&path).is_ok());
}

#[tokio::test]
async fn validate_reports_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "ftp://example.com", 0);

    let error = runner(&path).run_command(Commands::Validate).await.unwrap_err();

    assert!(matches!(error, SecureScanError::ConfigurationError { ref message, .. }
        if message.contains("base_url") && message.contains("timeout_secs")));
}
