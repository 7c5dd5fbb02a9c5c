//! Storyroom - a prompt roundtable for short-form video.
//!
//! A creative brief and a target platform go in; a panel of expert personas
//! (director, cinematographer, platform expert, marketer, music producer)
//! discusses it in two rounds, and a synthesis pass condenses the discussion
//! into a structured breakdown and one production-ready prompt for a text to
//! video model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storyroom::{Platform, Roundtable, RoundtableInput, StoryroomConfig, build_driver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryroomConfig::load()?;
//!     let driver = build_driver(&config.provider)?;
//!     let roundtable = Roundtable::from_config(driver, &config)?;
//!
//!     let input = RoundtableInput::builder()
//!         .brief("A person unwraps a gift at sunrise")
//!         .platform(Platform::Tiktok)
//!         .build()?;
//!
//!     let result = roundtable.run(&input).await?;
//!     println!("{}", result.optimized_prompt);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyroom_core` - Data model (inputs, transcripts, results, series context)
//! - `storyroom_interface` - The `StoryroomDriver` trait
//! - `storyroom_error` - Error types
//! - `storyroom_models` - OpenAI and Anthropic drivers, retry decorator
//! - `storyroom_roundtable` - Personas, context assembly, the two-round protocol, synthesis
//!
//! This crate re-exports everything for convenience.

pub use storyroom_core::*;
pub use storyroom_error::*;
pub use storyroom_interface::*;
pub use storyroom_models::{
    AnthropicClient, OpenAIClient, ProviderKind, ProviderSettings, ProviderSettingsBuilder,
    RetryPolicy, RetryPolicyBuilder, RetryingDriver, build_driver,
};
pub use storyroom_roundtable::*;

mod telemetry;

pub use telemetry::{LogFormat, init_console_telemetry};
