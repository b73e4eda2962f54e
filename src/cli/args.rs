//! CLI argument definitions using clap
//!
//! Commands:
//! - ladle serve --config <path> [--port <port>]
//! - ladle load --config <path> [--file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ladle - a self-hostable recipe catalog with a filterable REST API
#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./ladle.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Vet a recipe dataset and report what would load
    Load {
        /// Path to configuration file
        #[arg(long, default_value = "./ladle.json")]
        config: PathBuf,

        /// Dataset to vet; defaults to the configured data_file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
