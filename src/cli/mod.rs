//! CLI entry point
//!
//! The binary takes no request options; the whole request arrives as one
//! JSON document on stdin and the whole result leaves as one JSON line
//! on stdout. The process exits 0 on every path, so callers must inspect
//! the payload to detect failure.

use std::io::{self, Read};

use clap::Parser;

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::http::HttpClient;
use crate::request::PageRequest;
use crate::response::Outcome;

/// Fetch one page described by a JSON document on stdin.
#[derive(Debug, Parser)]
#[command(name = "pagefetch", version, about)]
pub struct Args {}

/// Main entry point for the CLI application
pub fn run() {
    crate::logging::init();
    let _args = Args::parse();

    let mut input = String::new();
    let outcome = match io::stdin().read_to_string(&mut input) {
        Ok(_) => execute(&input),
        Err(err) => Outcome::Error(FetchError::Io(err).to_string()),
    };

    println!("{}", outcome.to_json_line());
}

/// Run the full pipeline for one input document.
///
/// Every failure is folded into `Outcome::Error` here; callers never see
/// an `Err`.
pub fn execute(input: &str) -> Outcome {
    Outcome::from_result(try_execute(input))
}

fn try_execute(input: &str) -> Result<String> {
    let request = PageRequest::from_json(input)?;
    let plan = request.into_plan()?;
    let config = FetchConfig::default();

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| FetchError::Runtime(format!("failed to create async runtime: {}", e)))?;

    runtime.block_on(async {
        let client = HttpClient::new(&config)?;
        client.fetch(&plan).await
    })
}
