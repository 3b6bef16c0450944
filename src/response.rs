//! Response descriptor written to stdout

use serde::Serialize;

use crate::error::Result;

/// Terminal outcome of one invocation, serialized as a single JSON object
/// with exactly one key: `{"html": …}` on success, `{"error": …}` on any
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Html(String),
    Error(String),
}

impl Outcome {
    /// Fold a pipeline result into the outcome, using the error's display
    /// string as the in-band message.
    pub fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(body) => Outcome::Html(body),
            Err(err) => Outcome::Error(err.to_string()),
        }
    }

    /// Serialize to the single output line.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|err| format!(r#"{{"error":"serialization failure: {}"}}"#, err))
    }
}
