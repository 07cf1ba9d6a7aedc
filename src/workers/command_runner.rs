use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::HEALTH_ENDPOINT;
use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::enums::commands::Commands;
use crate::enums::output_format::{NoticeSink, OutputFormat};
use crate::enums::preset_code::PresetCode;
use crate::errors::{SecureScanError, SecureScanResult};
use crate::logger::analysis_spinner::AnalysisSpinner;
use crate::logger::notice_logger::{ConsoleNotifier, LogNotifier};
use crate::logger::report_printer::ReportPrinter;
use crate::services::analysis_orchestrator::AnalysisOrchestrator;
use crate::services::http_analysis_service::HttpAnalysisService;
use crate::services::input_capture::InputCapture;
use crate::structs::config::config::Config;
use crate::structs::preset::PRESETS;
use crate::structs::report::ReportOutput;
use crate::traits::notifier::Notifier;

pub struct CommandRunner {
    config_path: PathBuf,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_override: Option<PathBuf>) -> Self {
        Self {
            config_path: ConfigManager::resolve_path(config_override.as_deref()),
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SecureScanResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { force } => self.init_command(force),
            Commands::Analyze { code, file, preset, json } => self.analyze_command(code, file, preset, json).await,
            Commands::Presets => {
                Self::presets_command();
                Ok(())
            }
            Commands::Health => self.health_command().await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, force: bool) -> SecureScanResult<()> {
        log::info!("🚀 Initializing securescan configuration...");
        ConfigManager::create_sample_config(&self.config_path, force)?;
        log::info!("🔧 Run 'securescan validate' to check your configuration.");
        Ok(())
    }

    async fn analyze_command(
        &self,
        code: Option<String>,
        file: Option<PathBuf>,
        preset: Option<PresetCode>,
        json: bool,
    ) -> SecureScanResult<()> {
        let config = self.load_validated_config()?;
        let format = if json { OutputFormat::Json } else { config.output.format };

        let mut capture = InputCapture::new();
        if let Some(preset_code) = preset {
            let preset = capture.load_preset(preset_code);
            log::info!("💡 Loaded preset '{}': {}", preset.title, preset.rationale);
        }
        if let Some(code) = code {
            capture.set_text(code);
        }
        if let Some(path) = file {
            capture.set_text(Self::read_input(&path)?);
        }

        let service = HttpAnalysisService::new(&config.service)?;
        let notifier: Box<dyn Notifier> = match config.output.notices {
            NoticeSink::Console => Box::new(ConsoleNotifier),
            NoticeSink::Log => Box::new(LogNotifier),
        };
        let orchestrator = AnalysisOrchestrator::new(service, notifier, config.request.clone());

        log::info!("🔍 Sending snippet to {}", config.service.base_url);

        let spinner = (format == OutputFormat::Pretty && capture.can_trigger())
            .then(|| AnalysisSpinner::new("🔍 Analyzing with AI Security Copilot..."));
        let analysis = orchestrator.run_analysis(capture.text());
        let outcome = match &spinner {
            Some(spinner) => spinner.run(analysis).await,
            None => analysis.await,
        };

        match &outcome {
            AnalysisOutcome::EmptyInput => {
                return Err(SecureScanError::user_input_error(
                    capture.text(),
                    "a non-empty code snippet or issue description",
                    "Pass --code, --file or --preset",
                ));
            }
            AnalysisOutcome::Busy => {
                return Err(SecureScanError::system_error("analyze", "an analysis is already in flight"));
            }
            AnalysisOutcome::Completed(_) | AnalysisOutcome::Fallback { .. } => {}
        }

        let report = orchestrator
            .report()
            .ok_or_else(|| SecureScanError::system_error("rendering report", "no result is on display"))?;

        match format {
            OutputFormat::Pretty => ReportPrinter::print(&report, config.output.color),
            OutputFormat::Json => {
                let output = ReportOutput {
                    outcome: outcome.label(),
                    error: outcome.error().map(ToString::to_string),
                    report,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }

    fn presets_command() {
        println!("💡 Try these security examples:\n");
        for preset in &PRESETS {
            println!("  {:<18} {}", preset.code.slug(), preset.title);
            println!("  {:<18} {}", "", preset.rationale);
            println!("  {:<18} {}\n", "", preset.snippet);
        }
        println!("Run: securescan analyze --preset <name>");
    }

    async fn health_command(&self) -> SecureScanResult<()> {
        let config = self.load_validated_config()?;
        let service = HttpAnalysisService::new(&config.service)?;
        log::debug!("🩺 Probing {}", service.endpoint(HEALTH_ENDPOINT));

        let body = service.health().await?;
        log::info!("✅ Backend reachable at {}", config.service.base_url);
        if !body.trim().is_empty() {
            println!("{}", body.trim());
        }
        Ok(())
    }

    fn validate_command(&self) -> SecureScanResult<()> {
        log::info!("🔍 Validating configuration at {}", self.config_path.display());
        let config = ConfigManager::load(&self.config_path)?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 Backend: {}", config.service.base_url);
                log::info!(
                    "🧩 Request context: {} / {} / {}",
                    config.request.app_type,
                    config.request.tech_stack,
                    config.request.environment
                );
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                Err(Self::invalid_config(&errors))
            }
        }
    }

    fn load_validated_config(&self) -> SecureScanResult<Config> {
        let config = ConfigManager::load(&self.config_path)?;
        ConfigManager::validate_config(&config).map_err(|errors| Self::invalid_config(&errors))?;
        Ok(config)
    }

    fn invalid_config(errors: &[String]) -> SecureScanError {
        SecureScanError::config_error(
            &errors.join("; "),
            None,
            Some("Run 'securescan init' for a sample configuration"),
        )
    }

    fn read_input(path: &Path) -> SecureScanResult<String> {
        if path == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            return Ok(buffer);
        }

        std::fs::read_to_string(path)
            .map_err(|e| SecureScanError::file_error(&path.display().to_string(), "read", &e.to_string()))
    }
}
