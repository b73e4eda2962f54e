//! CLI module for Ladle
//!
//! Provides the command-line interface:
//! - serve: Boot the store, seed it, and run the HTTP server
//! - load: Vet a recipe dataset and report load counts

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
pub use io::write_response;
