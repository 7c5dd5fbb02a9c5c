//! LLM provider integrations for Storyroom.
//!
//! Two wire protocols are supported, both over plain `reqwest`:
//!
//! - **OpenAI-compatible** chat completions (`/chat/completions`), which also
//!   covers most self-hosted and proxy gateways
//! - **Anthropic** messages (`/v1/messages`)
//!
//! Credentials are resolved from the environment on every call, never at
//! construction, so building a driver never requires a key to be present.
//!
//! ```no_run
//! use storyroom_core::{CompletionOptions, Message};
//! use storyroom_interface::StoryroomDriver;
//! use storyroom_models::{ProviderSettings, build_driver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = build_driver(&ProviderSettings::default())?;
//! let options = CompletionOptions::builder().temperature(0.8).max_tokens(600).build()?;
//! let text = driver
//!     .complete("You are a film director.", &[Message::user("A gift at sunrise")], &options)
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod openai;
mod retry;
mod transport;
mod settings;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatResponseMessage, ChatRole, ChatUsage, OpenAIClient, ResponseFormat,
};
pub use retry::{RetryPolicy, RetryPolicyBuilder, RetryingDriver};
pub use settings::{ProviderKind, ProviderSettings, ProviderSettingsBuilder, build_driver};
