//! CLI module for recipe-api
//!
//! Parses arguments, loads configuration, installs logging, opens the store
//! and runs the HTTP server.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{load_config, open_store, run, serve};
pub use errors::{CliError, CliResult};
