//! OpenAI-compatible chat completions provider.

mod client;
mod dto;

pub use client::OpenAIClient;
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatResponseMessage, ChatRole, ChatUsage, ResponseFormat,
};
