//! Request/response conversion and credential handling, no network.

use std::time::Duration;
use storyroom_core::{GenerateRequest, Message};
use storyroom_error::StoryroomErrorKind;
use storyroom_interface::StoryroomDriver;
use storyroom_models::{
    AnthropicClient, AnthropicResponse, ChatCompletionResponse, ChatRole, OpenAIClient,
    ProviderKind, ProviderSettings, build_driver,
};

fn structured_request() -> anyhow::Result<GenerateRequest> {
    Ok(GenerateRequest::builder()
        .system(Some("You are a synthesis engine.".to_string()))
        .messages(vec![Message::user("Transcript goes here")])
        .temperature(Some(0.7))
        .max_tokens(Some(2500))
        .model(Some("gpt-4o".to_string()))
        .structured_output(true)
        .build()?)
}

#[test]
fn test_openai_system_prompt_leads_and_json_mode_is_requested() -> anyhow::Result<()> {
    let client = OpenAIClient::new("gpt-4o-mini", Duration::from_secs(5))?;
    let request = client.convert_request(&structured_request()?)?;

    assert_eq!(request.model(), "gpt-4o");
    assert_eq!(request.messages().len(), 2);
    assert_eq!(*request.messages()[0].role(), ChatRole::System);
    assert_eq!(*request.messages()[1].role(), ChatRole::User);

    let body = serde_json::to_value(&request)?;
    assert_eq!(body["response_format"]["type"], "json_object");
    assert_eq!(body["max_tokens"], 2500);
    Ok(())
}

#[test]
fn test_openai_plain_request_omits_response_format() -> anyhow::Result<()> {
    let client = OpenAIClient::new("gpt-4o-mini", Duration::from_secs(5))?;
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hello")])
        .build()?;

    let body = serde_json::to_value(client.convert_request(&request)?)?;

    assert_eq!(body["model"], "gpt-4o-mini");
    assert!(body.get("response_format").is_none());
    assert!(body.get("temperature").is_none());
    Ok(())
}

#[test]
fn test_openai_response_without_choices_is_an_error() -> anyhow::Result<()> {
    let empty: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x","choices":[]}"#)?;
    assert!(OpenAIClient::convert_response(&empty).is_err());

    let ok: ChatCompletionResponse = serde_json::from_str(
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Open wide."},"finish_reason":"stop"}]}"#,
    )?;
    assert_eq!(OpenAIClient::convert_response(&ok)?.text(), "Open wide.");
    Ok(())
}

#[test]
fn test_anthropic_json_mode_extends_system_prompt() -> anyhow::Result<()> {
    let client = AnthropicClient::new("claude-sonnet-4-5", Duration::from_secs(5))?;
    let request = client.convert_request(&structured_request()?)?;

    let system = request.system().clone().unwrap_or_default();
    assert!(system.starts_with("You are a synthesis engine."));
    assert!(system.contains("JSON"));
    assert_eq!(*request.max_tokens(), 2500);
    assert_eq!(request.messages()[0].role(), "user");
    Ok(())
}

#[test]
fn test_anthropic_skips_non_text_blocks() -> anyhow::Result<()> {
    let response: AnthropicResponse = serde_json::from_str(
        r#"{
            "id": "msg_1",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Golden light "},
                {"type": "text", "text": "spills in."}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 4}
        }"#,
    )?;

    assert_eq!(AnthropicClient::convert_response(&response)?.text(), "Golden light spills in.");
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_fails_at_first_call_not_construction() -> anyhow::Result<()> {
    let settings = ProviderSettings::builder()
        .kind(ProviderKind::Openai)
        .api_key_env("STORYROOM_TEST_KEY_THAT_IS_NEVER_SET")
        .build()?;

    let driver = build_driver(&settings)?;
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hello")])
        .build()?;

    let err = driver.generate(&request).await.unwrap_err();

    assert!(matches!(err.kind(), StoryroomErrorKind::Config(_)));
    assert!(err.to_string().contains("STORYROOM_TEST_KEY_THAT_IS_NEVER_SET"));
    Ok(())
}

#[test]
fn test_provider_settings_deserialize_with_defaults() -> anyhow::Result<()> {
    let settings: ProviderSettings = serde_json::from_str(r#"{"kind":"anthropic"}"#)?;

    assert_eq!(*settings.kind(), ProviderKind::Anthropic);
    assert_eq!(*settings.timeout_secs(), 90);
    assert_eq!(settings.api_key_env(), "ANTHROPIC_API_KEY");
    assert_eq!(build_driver(&settings)?.provider_name(), "anthropic");
    Ok(())
}
