mod cli;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

use error::AppError;

/// Parses the command line, loads configuration and runs the selected jobs.
pub fn run() -> Result<(), AppError> {
    cli::run()
}
