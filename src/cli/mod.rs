//! CLI module for the feedback service
//!
//! Provides command-line interface for:
//! - serve: Resolve configuration and run the HTTP server
//! - check-config: Print the effective configuration and exit

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::{Config, ENV_HOST, ENV_PORT};
pub use errors::{CliError, CliResult};
