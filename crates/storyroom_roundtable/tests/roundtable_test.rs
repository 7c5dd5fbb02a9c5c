//! End-to-end roundtable runs against a scripted driver.

mod test_utils;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storyroom_core::{
    AdvancedRoundtableInput, PersonaName, Platform, RoundtableInput, RoundtableResult,
    SeriesContext, SeriesSoraSettings, Shot,
};
use storyroom_error::{RoundtableErrorKind, StoryroomErrorKind};
use storyroom_roundtable::{
    FixedChallenge, ProductionDocument, Roundtable, StoryroomConfig,
};
use test_utils::{MockRoundtableDriver, gift_input};

fn roundtable(driver: &MockRoundtableDriver, challenge: bool) -> anyhow::Result<Roundtable> {
    let driver = Arc::new(driver.clone());
    Ok(Roundtable::from_config(driver, &StoryroomConfig::default())?
        .with_challenge_policy(FixedChallenge(challenge)))
}

#[tokio::test]
async fn test_gift_tiktok_run_without_challenge() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new();
    let result = roundtable(&driver, false)?.run(&gift_input()).await?;

    let round1_agents: Vec<_> = result.discussion.round1.iter().map(|r| r.agent).collect();
    assert_eq!(round1_agents, PersonaName::ROUND_ONE.to_vec());
    assert!(result.discussion.round1.iter().all(|r| !r.response.is_empty()));

    assert_eq!(result.discussion.round2.len(), 1);
    let build = &result.discussion.round2[0];
    assert_eq!(build.agent, PersonaName::SocialMediaMarketer);
    assert_eq!(
        build.building_on,
        Some(vec![PersonaName::Director, PersonaName::PlatformExpert])
    );
    assert!(!build.is_challenge);

    assert!(result.is_usable());
    assert!(result.optimized_prompt.starts_with("A person unwraps a small gift"));
    assert_eq!(
        result.character_count,
        result.optimized_prompt.chars().count()
    );
    assert_eq!(result.hashtags, vec!["#gift", "#sunrise"]);
    assert_eq!(
        result.detailed_breakdown.section("audio"),
        Some("Soft piano swelling at the reveal")
    );

    // Five round-one calls, one round-two call, one synthesis call.
    assert_eq!(driver.calls().len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_round_one_calls_are_in_flight_together() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new().gated_round_one(PersonaName::ROUND_ONE.len());
    let roundtable = roundtable(&driver, false)?;

    let result = tokio::time::timeout(Duration::from_secs(5), roundtable.run(&gift_input()))
        .await
        .map_err(|_| anyhow::anyhow!("round one did not dispatch its calls concurrently"))??;

    assert_eq!(result.discussion.round1.len(), PersonaName::ROUND_ONE.len());
    let round1_agents: Vec<_> = result.discussion.round1.iter().map(|r| r.agent).collect();
    assert_eq!(round1_agents, PersonaName::ROUND_ONE.to_vec());
    Ok(())
}

#[tokio::test]
async fn test_challenge_branch_runs_three_sequential_calls() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new();
    let result = roundtable(&driver, true)?.run(&gift_input()).await?;

    let round2 = &result.discussion.round2;
    assert_eq!(round2.len(), 3);

    assert_eq!(round2[0].agent, PersonaName::PlatformExpert);
    assert!(round2[0].is_challenge);
    assert_eq!(round2[0].responding_to, Some(PersonaName::Director));

    assert_eq!(round2[1].agent, PersonaName::Director);
    assert!(!round2[1].is_challenge);
    assert_eq!(round2[1].responding_to, Some(PersonaName::PlatformExpert));

    assert_eq!(round2[2].agent, PersonaName::SocialMediaMarketer);
    assert!(round2[2].building_on.is_some());
    Ok(())
}

#[tokio::test]
async fn test_each_round_two_call_sees_everything_before_it() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new();
    roundtable(&driver, true)?.run(&gift_input()).await?;

    let round2_calls: Vec<_> = driver
        .persona_calls()
        .into_iter()
        .filter(|c| c.request.messages().len() == 2)
        .collect();
    assert_eq!(round2_calls.len(), 3);

    let challenge = round2_calls[0].user_text();
    assert!(challenge.contains("[Director]: director take"));
    assert!(challenge.contains("[Music Producer]: music_producer take"));

    let rebuttal = round2_calls[1].user_text();
    assert!(rebuttal.contains("challenging the Director]: platform_expert take"));

    let build = round2_calls[2].user_text();
    assert!(build.contains("responding to the Platform Expert]: director take"));
    assert!(build.starts_with("CREATIVE BRIEF:\nA person unwraps a gift at sunrise"));
    Ok(())
}

#[tokio::test]
async fn test_round_one_failure_aborts_run() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new().failing_for(PersonaName::MusicProducer);
    let err = roundtable(&driver, false)?
        .run(&gift_input())
        .await
        .unwrap_err();

    match err.kind() {
        StoryroomErrorKind::Roundtable(e) => match &e.kind {
            RoundtableErrorKind::AgentCallFailed {
                persona,
                round,
                retryable,
                ..
            } => {
                assert_eq!(persona, "music_producer");
                assert_eq!(*round, 1);
                assert!(*retryable);
            }
            other => panic!("unexpected roundtable error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }

    assert!(driver.synthesis_call().is_none());
    Ok(())
}

#[tokio::test]
async fn test_round_two_failure_aborts_run() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new().failing_round_two_for(PersonaName::Director);
    let err = roundtable(&driver, true)?
        .run(&gift_input())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        StoryroomErrorKind::Roundtable(e)
            if matches!(e.kind, RoundtableErrorKind::AgentCallFailed { round: 2, .. })
    ));
    // Challenge went out, the rebuttal failed, the marketer was never asked.
    let round2_calls = driver
        .persona_calls()
        .into_iter()
        .filter(|c| c.request.messages().len() == 2)
        .count();
    assert_eq!(round2_calls, 2);
    assert!(driver.synthesis_call().is_none());
    Ok(())
}

#[tokio::test]
async fn test_synthesis_transport_failure_is_fatal() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new().failing_synthesis();
    let err = roundtable(&driver, false)?
        .run(&gift_input())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        StoryroomErrorKind::Roundtable(e)
            if matches!(e.kind, RoundtableErrorKind::SynthesisCallFailed(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_unparseable_synthesis_degrades_to_empty_result() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::with_synthesis_reply("I'd rather not produce JSON today.");
    let result = roundtable(&driver, false)?.run(&gift_input()).await?;

    assert!(!result.is_usable());
    assert_eq!(result.optimized_prompt, "");
    assert_eq!(result.character_count, 0);
    assert!(result.hashtags.is_empty());
    assert!(result.suggested_shots.is_none());
    assert!(result.detailed_breakdown.is_empty());
    // The transcript survives.
    assert_eq!(result.discussion.round1.len(), 5);
    assert_eq!(result.discussion.round2.len(), 1);
    assert_eq!(result, RoundtableResult::degraded(result.discussion.clone()));
    Ok(())
}

#[tokio::test]
async fn test_suggested_shots_are_renumbered_by_position() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new();
    let result = roundtable(&driver, false)?.run(&gift_input()).await?;

    let shots = result.suggested_shots.expect("shots present");
    let orders: Vec<_> = shots.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(shots[0].description, "Close on the ribbon");
    assert_eq!(shots[1].timing, "4-8s");
    Ok(())
}

#[tokio::test]
async fn test_reported_character_count_is_kept() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::with_synthesis_reply(
        r#"{"optimized_prompt": "Short prompt", "character_count": 512}"#,
    );
    let result = roundtable(&driver, false)?.run(&gift_input()).await?;

    assert_eq!(result.optimized_prompt, "Short prompt");
    assert_eq!(result.character_count, 512);
    assert!(result.hashtags.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_narrative_prefix_reaches_synthesis_verbatim() -> anyhow::Result<()> {
    let context = SeriesContext {
        sora_settings: Some(SeriesSoraSettings {
            sora_narrative_prefix: Some("In Maya's Journey, ".to_string()),
            sora_tone: Some("hopeful".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let input = RoundtableInput::builder()
        .brief("Maya finds a letter")
        .platform(Platform::Instagram)
        .context(context)
        .build()?;

    let driver = MockRoundtableDriver::new();
    roundtable(&driver, false)?.run(&input).await?;

    let synthesis = driver.synthesis_call().expect("synthesis call made");
    assert!(synthesis.request.structured_output());
    assert!(
        synthesis
            .user_text()
            .contains("MUST open with this exact phrase, verbatim: \"In Maya's Journey, \"")
    );

    let round1 = &driver.persona_calls()[0];
    assert!(round1.user_text().contains("- Tone: hopeful"));
    Ok(())
}

#[tokio::test]
async fn test_advanced_run_augments_every_round_one_brief() -> anyhow::Result<()> {
    let input = AdvancedRoundtableInput::builder()
        .input(gift_input())
        .user_prompt_edits("make it warmer")
        .shot_list(vec![
            Shot::new("4-8s", "Lid comes off", "overhead", 2),
            Shot::new("0-4s", "Ribbon in close-up", "macro", 1),
        ])
        .additional_guidance("Keep the face off camera")
        .build()?;

    let driver = MockRoundtableDriver::new();
    roundtable(&driver, false)?.run_advanced(&input).await?;

    let round1: Vec<_> = driver
        .persona_calls()
        .into_iter()
        .filter(|c| c.request.messages().len() == 1)
        .collect();
    assert_eq!(round1.len(), 5);
    for call in &round1 {
        let text = call.user_text();
        assert!(text.contains("make it warmer"));
        assert!(text.contains("Shot 1 (0-4s): Ribbon in close-up. Camera: macro."));
        assert!(text.contains("Shot 2 (4-8s): Lid comes off. Camera: overhead."));
        assert!(text.contains("Keep the face off camera"));
    }

    let synthesis = driver.synthesis_call().expect("synthesis call made").user_text();
    assert!(synthesis.contains("USER'S DIRECT PROMPT EDITS"));
    assert!(synthesis.contains("USER'S SHOT LIST"));
    Ok(())
}

#[tokio::test]
async fn test_schema_override_changes_output_contract() -> anyhow::Result<()> {
    let driver = MockRoundtableDriver::new();
    let table = roundtable(&driver, false)?.with_schema(Arc::new(ProductionDocument));
    assert_eq!(table.schema().character_band(), 2000..=3000);

    table.run(&gift_input()).await?;
    let synthesis = driver.synthesis_call().expect("synthesis call made");
    let system = synthesis.request.system().clone().unwrap_or_default();
    assert!(system.contains("between 2000 and 3000 characters"));
    Ok(())
}

#[tokio::test]
async fn test_challenge_is_drawn_once_per_run() -> anyhow::Result<()> {
    let draws = Arc::new(AtomicUsize::new(0));
    let counter = draws.clone();
    let driver = MockRoundtableDriver::new();
    let table = Roundtable::from_config(Arc::new(driver.clone()), &StoryroomConfig::default())?
        .with_challenge_policy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

    table.run(&gift_input()).await?;
    table.run(&gift_input()).await?;
    assert_eq!(draws.load(Ordering::SeqCst), 2);
    Ok(())
}
