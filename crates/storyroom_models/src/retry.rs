//! Opt-in retry decorator for any driver.
//!
//! The roundtable engine never retries on its own. Operators who want
//! backoff on transient provider failures wrap their driver here.

use async_trait::async_trait;
use std::time::Duration;
use storyroom_core::{GenerateRequest, GenerateResponse};
use storyroom_error::{RetryableError, StoryroomErrorKind, StoryroomResult};
use storyroom_interface::StoryroomDriver;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{instrument, warn};

/// Backoff configuration for [`RetryingDriver`].
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct RetryPolicy {
    /// Attempts after the first one
    #[builder(default = "3")]
    max_retries: usize,
    /// Initial backoff delay
    #[builder(default = "1000")]
    initial_backoff_ms: u64,
    /// Upper bound on any single delay
    #[builder(default = "30")]
    max_delay_secs: u64,
}

impl RetryPolicy {
    /// Creates a new builder for `RetryPolicy`.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Same policy with a different retry count.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 1000,
            max_delay_secs: 30,
        }
    }
}

/// Wraps a driver and retries transient failures with exponential backoff.
///
/// Only errors reporting [`StoryroomError::is_retryable`] are retried
/// (transport failures and 408/429/5xx responses). Provider errors carry
/// their own suggested delay, which overrides the schedule for that attempt.
///
/// [`StoryroomError::is_retryable`]: storyroom_error::StoryroomError::is_retryable
#[derive(Debug, Clone)]
pub struct RetryingDriver<D> {
    inner: D,
    policy: RetryPolicy,
}

impl<D: StoryroomDriver> RetryingDriver<D> {
    /// Wrap `inner` with `policy`.
    pub fn new(inner: D, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// The wrapped driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

#[async_trait]
impl<D: StoryroomDriver> StoryroomDriver for RetryingDriver<D> {
    #[instrument(skip(self, request), fields(max_retries = self.policy.max_retries))]
    async fn generate(&self, request: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        if self.policy.max_retries == 0 {
            return self.inner.generate(request).await;
        }

        let strategy = ExponentialBackoff::from_millis(self.policy.initial_backoff_ms)
            .factor(2)
            .max_delay(Duration::from_secs(self.policy.max_delay_secs))
            .map(jitter)
            .take(self.policy.max_retries);

        let inner = &self.inner;
        Retry::spawn(strategy, || async move {
            match inner.generate(request).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    let retry_after = match e.kind() {
                        StoryroomErrorKind::Models(models) => {
                            Some(Duration::from_millis(models.backoff_params().0))
                        }
                        _ => None,
                    };
                    warn!(error = %e, ?retry_after, "Transient provider failure, will retry");
                    Err(RetryError::Transient { err: e, retry_after })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
