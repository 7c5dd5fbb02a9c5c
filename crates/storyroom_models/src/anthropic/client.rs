use crate::transport::{http_client, resolve_api_key};
use crate::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use reqwest::Client;
use std::time::Duration;
use storyroom_core::{GenerateRequest, GenerateResponse, Output, Role};
use storyroom_error::{ModelsError, ModelsErrorKind, ModelsResult, StoryroomResult};
use storyroom_interface::StoryroomDriver;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "anthropic";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;
const JSON_ONLY_INSTRUCTION: &str =
    "Respond with a single valid JSON object and nothing else. Do not wrap it in markdown.";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    base_url: String,
    api_key_env: String,
    api_key: Option<String>,
    model: String,
}

impl AnthropicClient {
    /// Public Anthropic endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com";
    /// Environment variable read for the API key unless overridden.
    pub const DEFAULT_API_KEY_ENV: &'static str = "ANTHROPIC_API_KEY";

    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `model` - Default model identifier
    /// * `timeout` - Whole-request timeout
    pub fn new(model: impl Into<String>, timeout: Duration) -> StoryroomResult<Self> {
        let model = model.into();
        debug!(model = %model, "Creating new Anthropic client");
        Ok(Self {
            client: http_client(timeout)?,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key_env: Self::DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            model,
        })
    }

    /// Point the client at another endpoint.
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

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request, api_key), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
        api_key: &str,
    ) -> ModelsResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::new(ModelsErrorKind::Http {
                    provider: PROVIDER,
                    message: e.to_string(),
                })
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::new(ModelsErrorKind::Parse {
                provider: PROVIDER,
                message: e.to_string(),
            })
        })?;

        debug!(
            response_id = %anthropic_response.id(),
            output_tokens = *anthropic_response.usage().output_tokens(),
            "Received response from Anthropic"
        );
        Ok(anthropic_response)
    }

    /// Converts a `GenerateRequest` to an Anthropic API request.
    ///
    /// Structured output has no request flag on this API, so it is expressed
    /// as an extra instruction appended to the system prompt.
    pub fn convert_request(&self, request: &GenerateRequest) -> ModelsResult<AnthropicRequest> {
        let messages = request
            .messages()
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                    Role::System => {
                        return Err(ModelsError::new(ModelsErrorKind::Conversion(
                            "System role not supported in messages (use system parameter)"
                                .to_string(),
                        )));
                    }
                };
                AnthropicMessage::builder()
                    .role(role)
                    .content(msg.content.clone())
                    .build()
                    .map_err(|e| ModelsError::new(ModelsErrorKind::Conversion(e.to_string())))
            })
            .collect::<ModelsResult<Vec<_>>>()?;

        if messages.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::Conversion(
                "Anthropic requests need at least one message".to_string(),
            )));
        }

        let system = match (request.system(), request.structured_output()) {
            (Some(system), true) => Some(format!("{}\n\n{}", system, JSON_ONLY_INSTRUCTION)),
            (None, true) => Some(JSON_ONLY_INSTRUCTION.to_string()),
            (system, false) => system.clone(),
        };

        AnthropicRequest::builder()
            .model(request.model().clone().unwrap_or_else(|| self.model.clone()))
            .max_tokens(request.max_tokens().unwrap_or(DEFAULT_MAX_TOKENS))
            .system(system)
            .messages(messages)
            .temperature(*request.temperature())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Conversion(e.to_string())))
    }

    /// Converts an Anthropic API response to a `GenerateResponse`.
    pub fn convert_response(response: &AnthropicResponse) -> ModelsResult<GenerateResponse> {
        let text = response.text();
        if text.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyResponse(PROVIDER)));
        }
        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }
}

#[async_trait::async_trait]
impl StoryroomDriver for AnthropicClient {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        let api_key = resolve_api_key(self.api_key.as_deref(), &self.api_key_env)?;
        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request, &api_key).await?;
        Ok(Self::convert_response(&anthropic_response)?)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
