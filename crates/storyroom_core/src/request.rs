//! Request and response types for LLM generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Provider-neutral completion request.
///
/// The system prompt travels separately from the conversation turns because
/// providers disagree on where it belongs (a leading message for OpenAI, a
/// top-level field for Anthropic).
///
/// # Examples
///
/// ```
/// use storyroom_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .system(Some("You are a film director.".to_string()))
///     .messages(vec![Message::user("Brief: a gift at sunrise")])
///     .max_tokens(Some(600))
///     .temperature(Some(0.8))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert!(!request.structured_output());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// System instruction
    system: Option<String>,
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(setter(into = false))]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(setter(into = false))]
    temperature: Option<f32>,
    /// Model identifier to use
    model: Option<String>,
    /// Ask the provider for a JSON object instead of free text
    #[getter(skip)]
    structured_output: bool,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Whether the request asks for structured (JSON) output.
    pub fn structured_output(&self) -> bool {
        self.structured_output
    }
}

/// Sampling and routing options for a single `complete` call.
///
/// # Examples
///
/// ```
/// use storyroom_core::CompletionOptions;
///
/// let options = CompletionOptions::builder()
///     .model("gpt-4o")
///     .temperature(0.7)
///     .max_tokens(2500)
///     .structured_output(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(options.model().as_deref(), Some("gpt-4o"));
/// assert!(*options.structured_output());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct CompletionOptions {
    /// Model identifier; `None` uses the driver's default model
    #[builder(default, setter(into, strip_option))]
    model: Option<String>,
    /// Sampling temperature
    #[builder(setter(into = false))]
    temperature: f32,
    /// Output token cap
    #[builder(setter(into = false))]
    max_tokens: u32,
    /// Request structured JSON output
    #[builder(default)]
    structured_output: bool,
}

impl CompletionOptions {
    /// Creates a new options builder.
    pub fn builder() -> CompletionOptionsBuilder {
        CompletionOptionsBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use storyroom_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Open on a window.".to_string())],
/// };
///
/// assert_eq!(response.text(), "Open on a window.");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenate every output as text.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(Output::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}
