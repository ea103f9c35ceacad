//! CLI command implementations

use std::path::Path;

use tracing::info;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{init_logging, Event};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Start the HTTP server and block until it shuts down.
///
/// 1. Resolve configuration
/// 2. Install the log subscriber
/// 3. Build the server over a fresh in-memory store
/// 4. Serve until Ctrl+C / SIGTERM
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = Config::resolve(config_path, host, port)?;

    init_logging(config.log_format, &config.log_level);
    info!(
        event = %Event::ConfigLoaded,
        addr = %config.server.socket_addr(),
        from_file = config_path.is_some(),
        "configuration loaded"
    );

    let server = HttpServer::new(config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path, None, None)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
