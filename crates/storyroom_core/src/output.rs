//! Output types from LLM responses.

use serde::{Deserialize, Serialize};

/// Supported output types from completion providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output, for providers that return parsed payloads.
    Json(serde_json::Value),
}

impl Output {
    /// Render this output as text.
    ///
    /// JSON payloads are serialized compactly so callers can treat every
    /// provider uniformly as "returns a string".
    pub fn as_text(&self) -> String {
        match self {
            Output::Text(text) => text.clone(),
            Output::Json(value) => value.to_string(),
        }
    }
}
