//! Chat completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// One message in a chat completions conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: ChatRole,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Create a message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Requested response format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ResponseFormat {
    /// Format type, e.g. `json_object`
    #[serde(rename = "type")]
    kind: String,
}

impl ResponseFormat {
    /// Ask for a single JSON object.
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}

/// Chat completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation, system message first
    messages: Vec<ChatMessage>,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Structured output request
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// The message inside a completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct ChatResponseMessage {
    /// Role the provider assigned
    #[serde(default)]
    role: Option<String>,
    /// Text content; `None` for refusals and tool calls
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Choice index
    #[serde(default)]
    index: u32,
    /// Generated message
    message: ChatResponseMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct ChatUsage {
    /// Prompt tokens consumed
    #[serde(default)]
    prompt_tokens: u32,
    /// Completion tokens generated
    #[serde(default)]
    completion_tokens: u32,
}

/// Chat completions response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[serde(default)]
    id: Option<String>,
    /// Completion choices
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    usage: Option<ChatUsage>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if it has any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
