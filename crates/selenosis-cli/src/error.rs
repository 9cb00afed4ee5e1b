//! Error types for the CLI

use selenosis_common::telemetry::TelemetryError;
use selenosis_compiler::CompilationError;

/// CLI Result type
pub type Result<T> = std::result::Result<T, Error>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Common(#[from] selenosis_common::Error),

    #[error("compilation error: {0}")]
    Compilation(#[from] CompilationError),

    #[error("logging error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("validation error: {message}")]
    Validation { message: String },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}
