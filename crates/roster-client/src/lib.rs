//! `roster-client` - client-side components for the record API
//!
//! A typed HTTP client plus the form components (create, edit, listing)
//! as framework-independent state holders, driven by the `roster` CLI
//! binary or embedded in a UI shell.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod client;
pub mod forms;

pub use client::{ApiClient, ClientError, ClientResult, DEFAULT_API_ENDPOINT};
pub use forms::{CreateForm, EditForm, Level, ListView, Nav, ParseLevelError};
