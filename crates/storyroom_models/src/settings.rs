//! Provider selection and driver construction.

use crate::{AnthropicClient, OpenAIClient, RetryPolicy, RetryingDriver};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use storyroom_error::StoryroomResult;
use storyroom_interface::StoryroomDriver;
use tracing::{info, instrument};

/// Which wire protocol to speak.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions
    #[default]
    Openai,
    /// Anthropic messages
    Anthropic,
}

impl ProviderKind {
    /// Model used when neither the request nor the settings name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Openai => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-sonnet-4-5",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Openai => OpenAIClient::DEFAULT_API_KEY_ENV,
            ProviderKind::Anthropic => AnthropicClient::DEFAULT_API_KEY_ENV,
        }
    }
}

/// The `[provider]` configuration section.
///
/// # Examples
///
/// ```
/// use storyroom_models::{ProviderKind, ProviderSettings};
///
/// let settings = ProviderSettings::builder()
///     .kind(ProviderKind::Anthropic)
///     .timeout_secs(30u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.api_key_env(), "ANTHROPIC_API_KEY");
/// assert_eq!(settings.model(), "claude-sonnet-4-5");
/// assert_eq!(*settings.max_retries(), 0);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
#[serde(default)]
pub struct ProviderSettings {
    /// Wire protocol
    #[builder(default)]
    kind: ProviderKind,
    /// Endpoint override
    #[builder(default, setter(into, strip_option))]
    base_url: Option<String>,
    /// API key environment variable override
    #[builder(default, setter(into, strip_option))]
    #[getter(skip)]
    api_key_env: Option<String>,
    /// Driver default model override
    #[builder(default, setter(into, strip_option))]
    #[getter(skip)]
    model: Option<String>,
    /// Whole-request timeout
    #[builder(default = "90")]
    timeout_secs: u64,
    /// Retries on transient failures; 0 disables the retry decorator
    #[builder(default)]
    max_retries: usize,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            base_url: None,
            api_key_env: None,
            model: None,
            timeout_secs: 90,
            max_retries: 0,
        }
    }
}

impl ProviderSettings {
    /// Creates a new builder for `ProviderSettings`.
    pub fn builder() -> ProviderSettingsBuilder {
        ProviderSettingsBuilder::default()
    }

    /// Environment variable the driver reads its key from.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.kind.default_api_key_env())
    }

    /// Driver default model.
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.kind.default_model())
    }
}

/// Build the driver described by `settings`.
///
/// No credential is read here; a missing key fails the first call.
#[instrument(skip(settings), fields(kind = %settings.kind(), model = settings.model()))]
pub fn build_driver(settings: &ProviderSettings) -> StoryroomResult<Arc<dyn StoryroomDriver>> {
    let timeout = Duration::from_secs(*settings.timeout_secs());

    let driver: Arc<dyn StoryroomDriver> = match settings.kind() {
        ProviderKind::Openai => {
            let mut client = OpenAIClient::new(settings.model(), timeout)?
                .with_api_key_env(settings.api_key_env());
            if let Some(url) = settings.base_url() {
                client = client.with_base_url(url.as_str());
            }
            wrap(client, *settings.max_retries())
        }
        ProviderKind::Anthropic => {
            let mut client = AnthropicClient::new(settings.model(), timeout)?
                .with_api_key_env(settings.api_key_env());
            if let Some(url) = settings.base_url() {
                client = client.with_base_url(url.as_str());
            }
            wrap(client, *settings.max_retries())
        }
    };

    info!(provider = driver.provider_name(), "Provider driver ready");
    Ok(driver)
}

fn wrap<D: StoryroomDriver + 'static>(driver: D, max_retries: usize) -> Arc<dyn StoryroomDriver> {
    if max_retries == 0 {
        Arc::new(driver)
    } else {
        Arc::new(RetryingDriver::new(
            driver,
            RetryPolicy::default().with_max_retries(max_retries),
        ))
    }
}
