//! pagefetch - one-shot HTTP page fetcher driven by stdin JSON
//!
//! This crate reads a single JSON request document from standard input,
//! performs the HTTP GET it describes, and writes a single JSON response
//! document to standard output. Failures are reported inside the output
//! document, never through the exit status or stderr.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod request;
pub mod response;

pub use error::{FetchError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
