//! Tests for the default `complete` implementation.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyroom_core::{CompletionOptions, GenerateRequest, GenerateResponse, Message, Output};
use storyroom_error::StoryroomResult;
use storyroom_interface::StoryroomDriver;

/// Driver that records the last request and echoes a fixed reply.
#[derive(Default)]
struct RecordingDriver {
    last: Mutex<Option<GenerateRequest>>,
}

#[async_trait]
impl StoryroomDriver for RecordingDriver {
    async fn generate(&self, req: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        *self.last.lock().unwrap() = Some(req.clone());
        Ok(GenerateResponse {
            outputs: vec![
                Output::Text("Open on ".to_string()),
                Output::Text("a window.".to_string()),
            ],
        })
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }

    fn model_name(&self) -> &str {
        "recording-1"
    }
}

#[tokio::test]
async fn test_complete_folds_options_into_request() -> anyhow::Result<()> {
    let driver = RecordingDriver::default();
    let options = CompletionOptions::builder()
        .model("gpt-4o-mini")
        .temperature(0.8)
        .max_tokens(600)
        .build()?;

    let text = driver
        .complete("You are a director.", &[Message::user("Brief")], &options)
        .await?;

    assert_eq!(text, "Open on a window.");
    let request = driver.last.lock().unwrap().clone().expect("request recorded");
    assert_eq!(request.system().as_deref(), Some("You are a director."));
    assert_eq!(request.messages().len(), 1);
    assert_eq!(*request.max_tokens(), Some(600));
    assert_eq!(*request.temperature(), Some(0.8));
    assert_eq!(request.model().as_deref(), Some("gpt-4o-mini"));
    assert!(!request.structured_output());
    Ok(())
}

#[tokio::test]
async fn test_arc_driver_forwards() -> anyhow::Result<()> {
    let driver: Arc<dyn StoryroomDriver> = Arc::new(RecordingDriver::default());
    let options = CompletionOptions::builder()
        .temperature(0.7)
        .max_tokens(2500)
        .structured_output(true)
        .build()?;

    let text = driver.complete("system", &[], &options).await?;

    assert_eq!(text, "Open on a window.");
    assert_eq!(driver.provider_name(), "recording");
    assert_eq!(driver.model_name(), "recording-1");
    Ok(())
}
