//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyroom binary.

mod commands;
mod run;

pub use commands::{BriefArgs, ChallengeMode, Cli, Commands, RunArgs};
pub use run::{load_config, print_context, print_personas, run_advanced, run_roundtable};
