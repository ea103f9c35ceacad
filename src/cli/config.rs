//! Service configuration
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. JSON file passed with `--config`
//! 3. Environment (`FEEDBACK_HOST`, `FEEDBACK_PORT`)
//! 4. Command-line flags
//!
//! Every field is optional in the file:
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 5000, "cors_origins": [] },
//!   "log_format": "json",
//!   "log_level": "info"
//! }
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

pub const ENV_HOST: &str = "FEEDBACK_HOST";
pub const ENV_PORT: &str = "FEEDBACK_PORT";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener and CORS settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Log line format (default "pretty")
    #[serde(default)]
    pub log_format: LogFormat,

    /// Default log filter when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))
    }

    /// Resolve configuration from an optional file, the process environment
    /// and flag overrides, then validate it.
    pub fn resolve(
        path: Option<&Path>,
        host: Option<String>,
        port: Option<u16>,
    ) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_env(|key| env::var(key).ok())?;

        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }

        if let Some(raw) = lookup(ENV_PORT) {
            self.server.port = raw.trim().parse().map_err(|e| {
                CliError::Config(format!("Invalid {} value '{}': {}", ENV_PORT, raw, e))
            })?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.server.validate().map_err(CliError::Config)?;

        if self.log_level.trim().is_empty() {
            return Err(CliError::Config("log_level must not be empty".to_string()));
        }

        Ok(())
    }
}
