//! Live provider calls. Run with `--features api` and a key in `.env`.

use storyroom_core::{CompletionOptions, Message};
use storyroom_interface::StoryroomDriver;
use storyroom_models::{ProviderKind, ProviderSettings, build_driver};

async fn say_test(kind: ProviderKind) -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let settings = ProviderSettings::builder().kind(kind).build()?;
    let driver = build_driver(&settings)?;
    let options = CompletionOptions::builder()
        .temperature(0.0)
        .max_tokens(20)
        .build()?;

    let text = driver
        .complete(
            "Answer tersely.",
            &[Message::user("Say 'test' and nothing else.")],
            &options,
        )
        .await?;

    assert!(!text.trim().is_empty());
    println!("{kind}: {text}");
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_live_completion() -> anyhow::Result<()> {
    say_test(ProviderKind::Openai).await
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_live_completion() -> anyhow::Result<()> {
    say_test(ProviderKind::Anthropic).await
}
