//! Configuration management for roster.
//!
//! Configuration is loaded with figment from defaults, an optional TOML
//! file, and the environment. The database section feeds the
//! connection-string builder; none of its values are validated here.
//! Malformed values propagate into the connection attempt and surface as
//! a connection failure.

use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "roster";

/// Default address the API server binds to.
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Database selected when no name is configured, matching the historical
/// deployment this service replaces.
const DEFAULT_DATABASE_NAME: &str = "myFirstDatabase";

/// Query options appended to the connection URI when a database name is set.
const CONNECTION_OPTIONS: &str = "?retryWrites=true&w=majority";

/// Application configuration.
///
/// Sources, in order of precedence (highest first):
/// 1. Environment variables prefixed with `ROSTER_` (nested keys split on
///    `__`, e.g. `ROSTER_SERVER__BIND`)
/// 2. The legacy variables `MONGODB_URI`, `MONGODB_USER`,
///    `MONGODB_PASSWORD`, and `DATABASE_NAME`
/// 3. TOML config file at `~/.config/roster/config.toml`
/// 4. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document-store connection values.
    pub database: DatabaseConfig,
    /// HTTP server configuration.
    pub server: ServerConfig,
}

/// Connection values for the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Base connection fragment, e.g. `mongodb+srv://host.example.net`.
    pub uri: String,
    /// Username inserted into the connection string.
    pub user: String,
    /// Password inserted into the connection string.
    pub password: String,
    /// Database name; empty omits the database segment from the URI.
    pub name: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Assemble the store connection URI.
    ///
    /// The fragment is split on its scheme separator and re-joined with
    /// `user:password@` ahead of the host. A non-empty database name adds
    /// `/NAME` plus fixed query options; an empty name omits the segment.
    /// Nothing is validated: garbage in, garbage out to the driver.
    #[must_use]
    pub fn connection_string(&self) -> String {
        let (scheme, host) = match self.uri.split_once("//") {
            Some((scheme, host)) => (scheme, host),
            None => (self.uri.as_str(), ""),
        };

        let mut uri = format!("{scheme}//{}:{}@{host}", self.user, self.password);
        if !self.name.is_empty() {
            uri.push('/');
            uri.push_str(&self.name);
            uri.push_str(CONNECTION_OPTIONS);
        }
        uri
    }

    /// The database to select: the configured name, or the historical
    /// default when unset.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_DATABASE_NAME
        } else {
            &self.name
        }
    }
}

impl ServerConfig {
    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind.parse().map_err(|source| Error::BindAddr {
            value: self.bind.clone(),
            source,
        })
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or parsing fails, or if the bind
    /// address is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config file path.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or parsing fails, or if the bind
    /// address is invalid.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(legacy_env("MONGODB_URI", "database.uri"))
            .merge(legacy_env("MONGODB_USER", "database.user"))
            .merge(legacy_env("MONGODB_PASSWORD", "database.password"))
            .merge(legacy_env("DATABASE_NAME", "database.name"))
            .merge(Env::prefixed("ROSTER_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// Only the bind address is checked; database values intentionally
    /// pass through unexamined.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address cannot be parsed.
    pub fn validate(&self) -> Result<()> {
        self.server.bind_addr().map(|_| ())
    }
}

/// Map one unprefixed legacy environment variable onto a nested config key.
fn legacy_env(var: &'static str, key: &'static str) -> Env {
    Env::raw().only(&[var]).map(move |_| key.into()).split(".")
}
