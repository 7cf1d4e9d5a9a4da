//! Command-line interface for the `rosterd` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ServeCommand};

/// rosterd - record management API server
///
/// Serves the record collection over HTTP, backed by a document store
/// configured through `config.toml` or the environment.
#[derive(Debug, Parser)]
#[command(name = "rosterd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the record API server
    Serve(ServeCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["rosterd", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve(_)));
    }

    #[test]
    fn test_parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["rosterd", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        let Command::Serve(cmd) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(cmd.bind.as_deref(), Some("0.0.0.0:9000"));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["rosterd", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { .. })
        ));
    }

    #[test]
    fn test_parse_with_config_file() {
        let cli = Cli::try_parse_from(["rosterd", "-c", "/custom/config.toml", "serve"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_verbosity_flags() {
        let quiet = Cli::try_parse_from(["rosterd", "-q", "serve"]).unwrap();
        assert_eq!(quiet.verbosity(), crate::logging::Verbosity::Quiet);

        let verbose = Cli::try_parse_from(["rosterd", "-v", "serve"]).unwrap();
        assert_eq!(verbose.verbosity(), crate::logging::Verbosity::Verbose);

        let trace = Cli::try_parse_from(["rosterd", "-vv", "serve"]).unwrap();
        assert_eq!(trace.verbosity(), crate::logging::Verbosity::Trace);
    }
}
