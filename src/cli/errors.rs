//! Command failures
//!
//! Any of these ends the process with exit status 1 after `main` prints it.

use thiserror::Error;

/// Why a command could not finish
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file, environment or flag values are unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// Runtime or listener could not start, or the server stopped abnormally
    #[error("server failed: {0}")]
    Boot(String),

    /// Effective configuration could not be rendered for `check-config`
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    pub fn is_config(&self) -> bool {
        matches!(self, CliError::Config(_))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
