//! Command handlers.

use super::{BriefArgs, ChallengeMode, RunArgs};
use std::path::Path;
use storyroom::{
    AdvancedRoundtableInput, BuilderError, ConfigError, FixedChallenge, JsonError, Roundtable,
    RoundtableInput, RoundtableResult, SeriesContext, Shot, StoryroomConfig, StoryroomResult,
    all_personas, build_driver, build_user_message,
};
use tracing::{info, warn};

/// Load configuration from `path`, or from the standard locations.
pub fn load_config(path: Option<&Path>) -> StoryroomResult<StoryroomConfig> {
    match path {
        Some(path) => StoryroomConfig::from_file(path),
        None => StoryroomConfig::load(),
    }
}

/// Run the standard roundtable. Returns the result so the caller can pick
/// an exit status.
pub async fn run_roundtable(
    args: &RunArgs,
    config: &StoryroomConfig,
) -> StoryroomResult<RoundtableResult> {
    let roundtable = build_roundtable(args, config)?;
    let input = roundtable_input(&args.brief)?;
    let result = roundtable.run(&input).await?;
    print_result(&result)?;
    Ok(result)
}

/// Run the advanced roundtable.
pub async fn run_advanced(
    args: &RunArgs,
    edits: Option<String>,
    shots: Option<&Path>,
    guidance: Option<String>,
    config: &StoryroomConfig,
) -> StoryroomResult<RoundtableResult> {
    let roundtable = build_roundtable(args, config)?;

    let mut builder = AdvancedRoundtableInput::builder();
    builder.input(roundtable_input(&args.brief)?);
    if let Some(edits) = edits {
        builder.user_prompt_edits(edits);
    }
    if let Some(path) = shots {
        let shots: Vec<Shot> = read_json(path, "shot list")?;
        info!(shots = shots.len(), "Loaded shot list");
        builder.shot_list(shots);
    }
    if let Some(guidance) = guidance {
        builder.additional_guidance(guidance);
    }
    let input = builder
        .build()
        .map_err(|e| BuilderError::incomplete("AdvancedRoundtableInput", e))?;

    let result = roundtable.run_advanced(&input).await?;
    print_result(&result)?;
    Ok(result)
}

/// Print every persona as `name  display name  color`.
pub fn print_personas() {
    for persona in all_personas() {
        println!(
            "{:<24}{:<28}{}",
            persona.name().to_string(),
            persona.display_name(),
            persona.color_tag()
        );
    }
}

/// Print the assembled round-one user message.
pub fn print_context(args: &BriefArgs) -> StoryroomResult<()> {
    let context = series_context(args.series.as_deref())?;
    println!("{}", build_user_message(&args.brief, args.platform, &context));
    Ok(())
}

fn build_roundtable(args: &RunArgs, config: &StoryroomConfig) -> StoryroomResult<Roundtable> {
    let mut config = config.clone();
    if let Some(schema) = args.schema {
        config.synthesis.schema = schema;
    }

    let driver = build_driver(&config.provider)?;
    let roundtable = Roundtable::from_config(driver, &config)?;
    Ok(match args.challenge {
        ChallengeMode::Always => roundtable.with_challenge_policy(FixedChallenge(true)),
        ChallengeMode::Never => roundtable.with_challenge_policy(FixedChallenge(false)),
        ChallengeMode::Random => roundtable,
    })
}

fn roundtable_input(args: &BriefArgs) -> StoryroomResult<RoundtableInput> {
    let mut builder = RoundtableInput::builder();
    builder
        .brief(args.brief.clone())
        .platform(args.platform)
        .context(series_context(args.series.as_deref())?);
    if let Some(user_id) = &args.user_id {
        builder.user_id(user_id.clone());
    }
    builder
        .build()
        .map_err(|e| BuilderError::incomplete("RoundtableInput", e).into())
}

fn series_context(path: Option<&Path>) -> StoryroomResult<SeriesContext> {
    match path {
        Some(path) => read_json(path, "series context"),
        None => Ok(SeriesContext::default()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> StoryroomResult<T> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!("Failed to read {} {}: {}", what, path.display(), e))
    })?;
    serde_json::from_str(&text)
        .map_err(|e| JsonError::from_serde(format!("{} {}", what, path.display()), &e).into())
}

fn print_result(result: &RoundtableResult) -> StoryroomResult<()> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| JsonError::from_serde("RoundtableResult", &e))?;
    println!("{}", json);
    if !result.is_usable() {
        warn!("Synthesis produced no usable prompt");
    }
    Ok(())
}
