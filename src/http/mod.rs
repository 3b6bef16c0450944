//! HTTP client module
//!
//! This module performs the single GET described by a validated fetch
//! plan. Redirect handling stays on the reqwest default policy.

use std::collections::HashMap;

use reqwest::{Client, ClientBuilder};

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::request::FetchPlan;

/// HTTP client wrapper
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new().timeout(config.timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(FetchError::Http)?;

        Ok(Self { client })
    }

    /// Execute the GET and return the decoded response body.
    ///
    /// Non-2xx statuses are turned into errors so the status code shows
    /// up in the in-band error message. The body is decoded with the
    /// client's charset inference.
    pub async fn fetch(&self, plan: &FetchPlan) -> Result<String> {
        let mut request = self.client.get(&plan.url);

        for (key, value) in &plan.headers {
            request = request.header(key, value);
        }

        if !plan.cookies.is_empty() {
            request = request.header("Cookie", cookie_header(&plan.cookies));
        }

        log::debug!("GET {}", plan.url);

        let response = request.send().await.map_err(FetchError::Http)?;
        let response = response.error_for_status().map_err(FetchError::Http)?;
        let body = response.text().await.map_err(FetchError::Http)?;

        Ok(body)
    }
}

/// Render the cookie map as one `Cookie` request header value.
fn cookie_header(cookies: &HashMap<String, String>) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}
