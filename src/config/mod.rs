use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "language_analysis_masterframe25OCT.csv";
pub const DEFAULT_SUMMARY_PATH: &str = "assets/docs/executive_summary.pdf";
pub const DEFAULT_PLOT_PATH: &str = "assets/interactive_option_8_enhanced.html";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub paths: PathsConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let paths = PathsConfig {
            data: path_var("COGNATE_DATA_PATH", DEFAULT_DATA_PATH)?,
            summary: path_var("COGNATE_SUMMARY_PATH", DEFAULT_SUMMARY_PATH)?,
            plot: path_var("COGNATE_PLOT_PATH", DEFAULT_PLOT_PATH)?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            paths,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(var: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { var }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Input table and artifact locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    pub data: PathBuf,
    pub summary: PathBuf,
    pub plot: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    EmptyPath { var: &'static str },
}
