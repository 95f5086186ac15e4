// src/error.rs

//! Error types for the aneka-ui CLI.

use thiserror::Error;

/// Result type used throughout the library modules
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the library layer.
///
/// Command handlers wrap these in `anyhow::Error` for reporting; the
/// distinction that matters at the top level is config errors and install
/// errors (fatal) versus fetch errors (skipped per item).
#[derive(Debug, Error)]
pub enum Error {
    #[error("no aneka-ui.json found in {0}. Run `aneka-ui init` first")]
    ConfigMissing(String),

    #[error("invalid configuration: {0}")]
    ConfigError(String),

    #[error("component '{0}' not found in the registry")]
    NotFoundError(String),

    #[error("registry request failed: {0}")]
    FetchError(String),

    #[error("registry response failed validation: {0}")]
    SchemaError(String),

    #[error("{0}")]
    IoError(String),

    #[error("dependency installation failed: {0}")]
    InstallError(String),

    #[error("circular registry dependency: {0}")]
    CycleError(String),

    #[error("prompt failed: {0}")]
    PromptError(String),

    #[error("unsupported runtime: {0}")]
    RuntimeError(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}
