//! The completion driver trait.

use async_trait::async_trait;
use std::sync::Arc;
use storyroom_core::{CompletionOptions, GenerateRequest, GenerateResponse, Message};
use storyroom_error::StoryroomResult;

/// Core trait that every completion backend implements.
///
/// Implementors supply [`generate`](Self::generate); the engine uses the
/// narrower [`complete`](Self::complete), which folds a system prompt,
/// conversation turns, and sampling options into one request and returns
/// the text.
#[async_trait]
pub trait StoryroomDriver: Send + Sync {
    /// Run a single completion request.
    async fn generate(&self, req: &GenerateRequest) -> StoryroomResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier, used when a request names none.
    fn model_name(&self) -> &str;

    /// Complete a conversation and return the response text.
    async fn complete(
        &self,
        system: &str,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> StoryroomResult<String> {
        let request = GenerateRequest::builder()
            .system(Some(system.to_string()))
            .messages(messages.to_vec())
            .temperature(Some(*options.temperature()))
            .max_tokens(Some(*options.max_tokens()))
            .model(options.model().clone())
            .structured_output(*options.structured_output())
            .build()
            .map_err(|e| storyroom_error::BuilderError::incomplete("GenerateRequest", e))?;

        tracing::debug!(
            provider = self.provider_name(),
            model = options.model().as_deref().unwrap_or(self.model_name()),
            turns = messages.len(),
            structured = *options.structured_output(),
            "Sending completion"
        );
        let response = self.generate(&request).await?;
        let text = response.text();
        tracing::debug!(response_chars = text.chars().count(), "Completion received");
        Ok(text)
    }
}

#[async_trait]
impl<D: StoryroomDriver + ?Sized> StoryroomDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: StoryroomDriver + ?Sized> StoryroomDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
