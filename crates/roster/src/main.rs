//! `rosterd` - record API server binary.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use roster::cli::{Cli, Command, ConfigCommand, ServeCommand};
use roster::{api, init_logging, AppState, Config, MongoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Serve(cmd) => handle_serve(&config, &cmd).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

async fn handle_serve(config: &Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    let addr: SocketAddr = match &cmd.bind {
        Some(bind) => bind
            .parse()
            .with_context(|| format!("invalid bind address `{bind}`"))?,
        None => config.server.bind_addr()?,
    };

    // One connection at startup, shared by every request. A connection
    // failure here is fatal; there is no retry.
    let store = MongoStore::connect(&config.database).await?;
    let state = AppState::new(Arc::new(store));

    api::serve(addr, state).await?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[database]");
                println!("  URI fragment:  {}", config.database.uri);
                println!("  User:          {}", config.database.user);
                println!(
                    "  Password:      {}",
                    if config.database.password.is_empty() {
                        "(unset)"
                    } else {
                        "(set)"
                    }
                );
                println!("  Database:      {}", config.database.name_or_default());
                println!();
                println!("[server]");
                println!("  Bind address:  {}", config.server.bind);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
