//! `roster` - record management over a document store
//!
//! This library provides the record model, the store abstraction with its
//! MongoDB and in-memory implementations, and the HTTP API served by the
//! `rosterd` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;

pub use api::AppState;
pub use config::{Config, DatabaseConfig, ServerConfig};
pub use error::{Error, Result};
pub use logging::{init_logging, Verbosity};
pub use record::{DeleteAck, InsertAck, Record, RecordFields, UpdateAck};
pub use store::{memory::MemoryStore, mongo::MongoStore, RecordStore};
