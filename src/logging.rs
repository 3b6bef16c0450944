//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging with a default filter level.
///
/// Logs go to stderr and the pipeline only logs at debug, so nothing is
/// written unless RUST_LOG opts in. Stdout stays reserved for the JSON
/// response document.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
}
