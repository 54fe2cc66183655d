//! CLI error types.

use thiserror::Error;
use trackview::config::ConfigError;
use trackview::exercise::ExerciseError;
use trackview::map::MapError;

/// Errors reported to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to load the exercise file.
    #[error("Failed to load exercise: {0}")]
    Exercise(#[from] ExerciseError),

    /// Failed to load the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A map surface operation failed.
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// The map surface could not be displayed.
    #[error("Map display failed: {0}")]
    Display(String),

    /// Invalid command-line input.
    #[error("{0}")]
    InvalidArgument(String),
}
