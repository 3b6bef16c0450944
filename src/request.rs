//! Request descriptor parsing and validation
//!
//! The stdin document is deserialized into [`PageRequest`] and then
//! validated into a [`FetchPlan`]. Nested shapes are typed, so malformed
//! `headers` or `cookies` fail at parse time instead of mid-request.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{FetchError, Result};

/// One cookie record from the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
}

/// Parsed form of the stdin JSON document.
#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub cookies: Vec<CookieRecord>,
}

/// Validated request, ready for the HTTP layer.
#[derive(Debug)]
pub struct FetchPlan {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub cookies: HashMap<String, String>,
}

impl PageRequest {
    /// Parse the raw stdin text into a request descriptor.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(FetchError::Json)
    }

    /// Validate the descriptor into a fetch plan.
    ///
    /// A missing, null, or empty `url` is a terminal validation error.
    /// The cookie map is built in one pass over the sequence, so a later
    /// record with a duplicate name overwrites an earlier one.
    pub fn into_plan(self) -> Result<FetchPlan> {
        let url = match self.url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(FetchError::MissingUrl),
        };

        let cookies = self
            .cookies
            .into_iter()
            .map(|cookie| (cookie.name, cookie.value))
            .collect();

        Ok(FetchPlan {
            url,
            headers: self.headers,
            cookies,
        })
    }
}
