//! A full roundtable against the configured provider. Run with
//! `--features api` and a key in `.env`.

use storyroom_core::{Platform, RoundtableInput};
use storyroom_models::build_driver;
use storyroom_roundtable::{FixedChallenge, Roundtable, SchemaKind, StoryroomConfig};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_roundtable_produces_usable_prompt() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let mut config = StoryroomConfig::load()?;
    config.synthesis.schema = SchemaKind::PlatformTuned;

    let driver = build_driver(&config.provider)?;
    let roundtable =
        Roundtable::from_config(driver, &config)?.with_challenge_policy(FixedChallenge(true));

    let input = RoundtableInput::builder()
        .brief("A person unwraps a gift at sunrise")
        .platform(Platform::Tiktok)
        .build()?;
    let result = roundtable.run(&input).await?;

    assert_eq!(result.discussion.round1.len(), config.roundtable.roster.len());
    assert_eq!(result.discussion.round2.len(), 3);
    assert!(result.is_usable());
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
