//! The facade re-exports are enough to drive a whole roundtable.

use async_trait::async_trait;
use std::sync::Arc;
use storyroom::{
    FixedChallenge, GenerateRequest, GenerateResponse, Output, Platform, Roundtable,
    RoundtableInput, StoryroomConfig, StoryroomDriver, StoryroomResult,
};

/// Answers persona calls with a fixed line and structured calls with JSON.
struct EchoDriver;

#[async_trait]
impl StoryroomDriver for EchoDriver {
    async fn generate(&self, req: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        let text = if req.structured_output() {
            r##"{"optimized_prompt": "Dawn light on a wrapped box.", "hashtags": ["#dawn"]}"##
                .to_string()
        } else {
            "Keep it simple.".to_string()
        };
        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

#[tokio::test]
async fn test_roundtable_through_facade() -> anyhow::Result<()> {
    let roundtable = Roundtable::from_config(Arc::new(EchoDriver), &StoryroomConfig::default())?
        .with_challenge_policy(FixedChallenge(false));

    let input = RoundtableInput::builder()
        .brief("A person unwraps a gift at sunrise")
        .platform(Platform::Facebook)
        .build()?;
    let result = roundtable.run(&input).await?;

    assert_eq!(result.optimized_prompt, "Dawn light on a wrapped box.");
    assert_eq!(result.character_count, 28);
    assert_eq!(result.hashtags, vec!["#dawn"]);
    // Default schema wants 600..=1000 characters.
    assert!(!result.within_band(roundtable.schema().character_band()));

    let json = serde_json::to_value(&result)?;
    assert_eq!(json["characterCount"], 28);
    assert!(json["discussion"]["round1"].is_array());
    Ok(())
}
