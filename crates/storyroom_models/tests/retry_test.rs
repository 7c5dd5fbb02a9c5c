//! Retry decorator behavior against a scripted flaky driver.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use storyroom_core::{GenerateRequest, GenerateResponse, Message, Output};
use storyroom_error::{HttpError, ModelsError, ModelsErrorKind, StoryroomResult};
use storyroom_interface::StoryroomDriver;
use storyroom_models::{RetryPolicy, RetryingDriver};

/// Fails with the configured error for the first `failures` calls.
struct FlakyDriver {
    failures: usize,
    permanent: bool,
    calls: AtomicUsize,
}

impl FlakyDriver {
    fn new(failures: usize, permanent: bool) -> Self {
        Self {
            failures,
            permanent,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryroomDriver for FlakyDriver {
    async fn generate(&self, _req: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            if self.permanent {
                return Err(ModelsError::new(ModelsErrorKind::Api {
                    provider: "flaky",
                    status: 401,
                    message: "bad key".to_string(),
                })
                .into());
            }
            return Err(HttpError::new("connection reset").into());
        }
        Ok(GenerateResponse {
            outputs: vec![Output::Text("ok".to_string())],
        })
    }

    fn provider_name(&self) -> &'static str {
        "flaky"
    }

    fn model_name(&self) -> &str {
        "flaky-1"
    }
}

fn fast_policy(max_retries: usize) -> anyhow::Result<RetryPolicy> {
    Ok(RetryPolicy::builder()
        .max_retries(max_retries)
        .initial_backoff_ms(1u64)
        .max_delay_secs(1u64)
        .build()?)
}

fn request() -> anyhow::Result<GenerateRequest> {
    Ok(GenerateRequest::builder()
        .messages(vec![Message::user("hi")])
        .build()?)
}

#[tokio::test]
async fn test_transient_failures_are_retried() -> anyhow::Result<()> {
    let driver = RetryingDriver::new(FlakyDriver::new(2, false), fast_policy(3)?);

    let response = driver.generate(&request()?).await?;

    assert_eq!(response.text(), "ok");
    assert_eq!(driver.inner().calls(), 3);
    Ok(())
}

#[tokio::test]
async fn test_permanent_failures_are_not_retried() -> anyhow::Result<()> {
    let driver = RetryingDriver::new(FlakyDriver::new(1, true), fast_policy(3)?);

    let result = driver.generate(&request()?).await;

    assert!(result.is_err());
    assert_eq!(driver.inner().calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_retries_give_up_after_budget() -> anyhow::Result<()> {
    let driver = RetryingDriver::new(FlakyDriver::new(10, false), fast_policy(2)?);

    let result = driver.generate(&request()?).await;

    assert!(result.is_err());
    assert_eq!(driver.inner().calls(), 3);
    Ok(())
}

#[tokio::test]
async fn test_zero_retries_calls_once() -> anyhow::Result<()> {
    let driver = RetryingDriver::new(FlakyDriver::new(1, false), fast_policy(0)?);

    assert!(driver.generate(&request()?).await.is_err());
    assert_eq!(driver.inner().calls(), 1);
    Ok(())
}
