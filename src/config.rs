//! Configuration management for pagefetch

use std::time::Duration;

/// Total request timeout, covering connection and response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Main configuration struct
///
/// There is no configuration file and no CLI override; every invocation
/// runs with the defaults. The struct exists so tests can shorten the
/// timeout when exercising slow mock servers.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: DEFAULT_TIMEOUT,
            user_agent: Some(format!("pagefetch/{}", crate::VERSION)),
        }
    }
}
