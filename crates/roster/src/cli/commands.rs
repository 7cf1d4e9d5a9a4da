//! Command definitions for the `rosterd` CLI.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the `serve` command.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Bind address, overriding the configured value
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// File to validate (defaults to the standard location)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
