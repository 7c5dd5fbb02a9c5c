//! Anthropic messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One conversation turn. Anthropic accepts plain string content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// `user` or `assistant`
    role: String,
    /// Turn text
    content: String,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Messages API request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Output token cap (required by the API)
    max_tokens: u32,
    /// Top-level system prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Conversation turns
    messages: Vec<AnthropicMessage>,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// A content block in a response. Only text blocks carry completion text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text output
    Text {
        /// The text
        text: String,
    },
    /// Any other block type (tool use, thinking, ...)
    #[serde(other)]
    Other,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens consumed
    #[serde(default)]
    input_tokens: u32,
    /// Output tokens generated
    #[serde(default)]
    output_tokens: u32,
}

/// Messages API response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response identifier
    id: String,
    /// Content blocks
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
    /// Token usage
    #[serde(default)]
    usage: AnthropicUsage,
}

impl AnthropicResponse {
    /// Concatenated text of every text block.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text.as_str()),
                AnthropicContentBlock::Other => None,
            })
            .collect()
    }
}
