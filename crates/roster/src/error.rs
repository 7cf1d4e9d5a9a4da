//! Error types for roster.
//!
//! One taxonomy covers the whole server crate: configuration, store
//! connection and per-request store failures, and the HTTP listener.

use thiserror::Error;

/// The main error type for roster operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The configured bind address could not be parsed.
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        /// The offending address string.
        value: String,
        /// The underlying parse error.
        #[source]
        source: std::net::AddrParseError,
    },

    // === Store Errors ===
    /// Failed to establish the store connection at startup.
    #[error("failed to connect to document store: {source}")]
    StoreConnect {
        /// The underlying driver error.
        #[source]
        source: mongodb::error::Error,
    },

    /// A store operation failed while serving a request.
    #[error("store operation failed: {0}")]
    Store(#[from] mongodb::error::Error),

    /// A record identifier was not a valid `ObjectId` hex string.
    #[error("invalid record id `{value}`")]
    InvalidId {
        /// The identifier as received.
        value: String,
    },

    // === I/O Errors ===
    /// Listener or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid-identifier error.
    #[must_use]
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId {
            value: value.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a caller-supplied bad identifier.
    #[must_use]
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId { .. })
    }
}
