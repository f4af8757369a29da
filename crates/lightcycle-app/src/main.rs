use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use lightcycle_app::config::{AppConfig, ConfigSource};
use lightcycle_app::error::AppError;

fn init_logging(config: &AppConfig) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let (config, source) = match AppConfig::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("lightcycle: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("lightcycle: cannot open log file {}: {e}", config.log_file);
        return ExitCode::FAILURE;
    }

    tracing::info!("Light Cycle starting");
    match source {
        ConfigSource::File(path) => tracing::info!("Loaded configuration from {path}"),
        ConfigSource::Defaults => tracing::info!("No config file found, using defaults"),
        ConfigSource::Invalid { path, error } => {
            tracing::warn!("Failed to parse {path}: {error}, using defaults");
        },
    }

    match lightcycle_app::run_app(&config).await {
        Ok(()) => {
            tracing::info!("Light Cycle exited");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!(error = %e, "Light Cycle failed");
            eprintln!("lightcycle: {e}");
            ExitCode::FAILURE
        },
    }
}
