//! CLI argument definitions using clap
//!
//! Commands:
//! - feedback-board serve [--config <path>] [--host <host>] [--port <port>]
//! - feedback-board check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Feedback Board - collect and list feedback over HTTP
#[derive(Parser, Debug)]
#[command(name = "feedback-board")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config and FEEDBACK_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and FEEDBACK_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate configuration, print it, and exit
    CheckConfig {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
