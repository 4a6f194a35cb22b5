//! CLI argument definitions using clap
//!
//! recipe-api [--config <path>] [--host <host>] [--port <port>]

use clap::Parser;
use std::path::PathBuf;

/// recipe-api - Recipe record-management HTTP service
#[derive(Parser, Debug, Default)]
#[command(name = "recipe-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides the config file)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
