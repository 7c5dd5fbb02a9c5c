//! Shared HTTP plumbing for the provider clients.

use reqwest::Client;
use std::time::Duration;
use storyroom_error::{ConfigError, HttpError};

/// Build a `reqwest` client with a whole-request timeout.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, HttpError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))
}

/// Resolve an API key: an explicit key wins, otherwise read `env_var`.
///
/// Called per request so that constructing a client never requires the
/// credential to exist.
pub(crate) fn resolve_api_key(explicit: Option<&str>, env_var: &str) -> Result<String, ConfigError> {
    if let Some(key) = explicit.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }
    std::env::var(env_var)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| ConfigError::missing_credential(env_var))
}
