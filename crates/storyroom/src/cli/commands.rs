//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storyroom::{Platform, SchemaKind};

/// Storyroom - turn a creative brief into a production-ready video prompt
#[derive(Parser, Debug)]
#[command(name = "storyroom")]
#[command(about = "Multi-persona roundtable for short-form video prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true, env = "STORYROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the standard roundtable and print the result as JSON
    Run(RunArgs),

    /// Run the advanced roundtable with edits, a shot list, and guidance
    Advanced {
        /// Standard run options
        #[command(flatten)]
        run: RunArgs,

        /// Your direct edits to a previous prompt
        #[arg(long)]
        edits: Option<String>,

        /// JSON file holding an array of shots
        #[arg(long)]
        shots: Option<PathBuf>,

        /// Free-text guidance for the panel
        #[arg(long)]
        guidance: Option<String>,
    },

    /// List the persona registry
    Personas,

    /// Print the assembled round-one user message without calling a model
    Context(BriefArgs),
}

/// The brief, its platform, and optional series context.
#[derive(Args, Debug, Clone)]
pub struct BriefArgs {
    /// Creative brief
    #[arg(long)]
    pub brief: String,

    /// Target platform (tiktok, instagram, youtube_shorts, facebook, snapchat)
    #[arg(long)]
    pub platform: Platform,

    /// JSON file holding the series context
    #[arg(long)]
    pub series: Option<PathBuf>,

    /// Caller identifier recorded in logs
    #[arg(long)]
    pub user_id: Option<String>,
}

/// Options shared by `run` and `advanced`.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Brief, platform, and series context
    #[command(flatten)]
    pub brief: BriefArgs,

    /// Whether round two opens with a challenge
    #[arg(long, value_enum, default_value_t = ChallengeMode::Random)]
    pub challenge: ChallengeMode,

    /// Synthesis schema override (platform_tuned, cinematic_narrative, production_document)
    #[arg(long)]
    pub schema: Option<SchemaKind>,
}

/// Round-two challenge selection
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeMode {
    /// Always challenge
    Always,
    /// Never challenge
    Never,
    /// Use the configured probability
    Random,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_parses_brief_platform_and_challenge() {
        let cli = Cli::try_parse_from([
            "storyroom",
            "run",
            "--brief",
            "A gift at sunrise",
            "--platform",
            "tiktok",
            "--challenge",
            "always",
            "--schema",
            "platform_tuned",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.brief.platform, Platform::Tiktok);
        assert_eq!(args.challenge, ChallengeMode::Always);
        assert_eq!(args.schema, Some(SchemaKind::PlatformTuned));
        assert!(args.brief.series.is_none());
    }

    #[test]
    fn test_global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "storyroom",
            "context",
            "--brief",
            "x",
            "--platform",
            "youtube_shorts",
            "--verbose",
            "--log-json",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.log_json);
        assert!(matches!(cli.command, Commands::Context(_)));
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let parsed =
            Cli::try_parse_from(["storyroom", "run", "--brief", "x", "--platform", "myspace"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_advanced_takes_edits_and_shots() {
        let cli = Cli::try_parse_from([
            "storyroom",
            "advanced",
            "--brief",
            "x",
            "--platform",
            "instagram",
            "--edits",
            "make it warmer",
            "--shots",
            "shots.json",
        ])
        .unwrap();

        let Commands::Advanced {
            run, edits, shots, ..
        } = cli.command
        else {
            panic!("expected advanced");
        };
        assert_eq!(run.challenge, ChallengeMode::Random);
        assert_eq!(edits.as_deref(), Some("make it warmer"));
        assert_eq!(shots, Some(PathBuf::from("shots.json")));
    }
}
