use crate::transport::{http_client, resolve_api_key};
use crate::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, ResponseFormat};
use reqwest::Client;
use std::time::Duration;
use storyroom_core::{GenerateRequest, GenerateResponse, Output, Role};
use storyroom_error::{ModelsError, ModelsErrorKind, ModelsResult, StoryroomResult};
use storyroom_interface::StoryroomDriver;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "openai";

/// Client for any OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    base_url: String,
    api_key_env: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAIClient {
    /// Public OpenAI endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    /// Environment variable read for the API key unless overridden.
    pub const DEFAULT_API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    /// Creates a client for `model` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized. A missing
    /// API key is not an error here; it surfaces on the first call.
    pub fn new(model: impl Into<String>, timeout: Duration) -> StoryroomResult<Self> {
        let model = model.into();
        debug!(model = %model, "Creating OpenAI-compatible client");
        Ok(Self {
            client: http_client(timeout)?,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key_env: Self::DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            model,
        })
    }

    /// Point the client at another compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Read the API key from a different environment variable.
    pub fn with_api_key_env(mut self, env_var: impl Into<String>) -> Self {
        self.api_key_env = env_var.into();
        self
    }

    /// Use a fixed API key instead of the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Converts a `GenerateRequest` to a chat completions request.
    ///
    /// The system prompt becomes the leading `system` message.
    pub fn convert_request(&self, request: &GenerateRequest) -> ModelsResult<ChatCompletionRequest> {
        let mut messages = Vec::with_capacity(request.messages().len() + 1);
        if let Some(system) = request.system() {
            messages.push(ChatMessage::new(ChatRole::System, system.clone()));
        }
        messages.extend(request.messages().iter().map(|msg| {
            let role = match msg.role {
                Role::System => ChatRole::System,
                Role::User => ChatRole::User,
                Role::Assistant => ChatRole::Assistant,
            };
            ChatMessage::new(role, msg.content.clone())
        }));

        let model = request.model().clone().unwrap_or_else(|| self.model.clone());
        let response_format = request
            .structured_output()
            .then(ResponseFormat::json_object);

        ChatCompletionRequest::builder()
            .model(model)
            .messages(messages)
            .temperature(*request.temperature())
            .max_tokens(*request.max_tokens())
            .response_format(response_format)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Conversion(e.to_string())))
    }

    /// Converts a chat completions response to a `GenerateResponse`.
    pub fn convert_response(response: &ChatCompletionResponse) -> ModelsResult<GenerateResponse> {
        let text = response
            .first_text()
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse(PROVIDER)))?;
        Ok(GenerateResponse {
            outputs: vec![Output::Text(text.to_string())],
        })
    }

    /// Sends a chat completions request.
    #[instrument(skip(self, request, api_key), fields(model = %request.model()))]
    pub async fn chat(
        &self,
        request: &ChatCompletionRequest,
        api_key: &str,
    ) -> ModelsResult<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, "Sending chat completions request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat completions request");
                ModelsError::new(ModelsErrorKind::Http {
                    provider: PROVIDER,
                    message: e.to_string(),
                })
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat completions API returned error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message: body,
            }));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completions response");
            ModelsError::new(ModelsErrorKind::Parse {
                provider: PROVIDER,
                message: e.to_string(),
            })
        })?;

        debug!(
            choices = parsed.choices().len(),
            completion_tokens = parsed.usage().as_ref().map(|u| *u.completion_tokens()),
            "Received chat completions response"
        );
        Ok(parsed)
    }
}

#[async_trait::async_trait]
impl StoryroomDriver for OpenAIClient {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        let api_key = resolve_api_key(self.api_key.as_deref(), &self.api_key_env)?;
        let chat_request = self.convert_request(request)?;
        let chat_response = self.chat(&chat_request, &api_key).await?;
        Ok(Self::convert_response(&chat_response)?)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
