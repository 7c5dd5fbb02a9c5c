//! The Storyroom roundtable engine.
//!
//! A creative brief goes to a panel of expert personas. Round one asks every
//! persona in parallel; round two runs a short sequential exchange (an
//! optional challenge and rebuttal, then a synthesis-minded build). A final
//! structured call condenses the transcript into a production breakdown,
//! a platform-ready prompt, hashtags, and a shot list.
//!
//! Entry point is [`Roundtable`]; [`StoryroomConfig`] supplies model routing,
//! sampling parameters, the roster, and provider settings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod challenge;
mod config;
mod context;
mod controller;
mod extraction;
mod invoker;
mod personas;
mod synthesis;

pub use challenge::{ChallengePolicy, FixedChallenge, RandomChallenge};
pub use config::{
    AgentSettings, ModelRole, ModelRouting, RoundtableSettings, StoryroomConfig,
    SynthesisSettings,
};
pub use context::{augment_brief, build_user_message};
pub use controller::Roundtable;
pub use extraction::extract_json;
pub use invoker::{AgentInvoker, RoundTwoBranch};
pub use personas::{Persona, SAFETY_RULES, all_personas, persona};
pub use synthesis::{
    CinematicNarrative, PlatformTuned, ProductionDocument, SchemaKind, SynthesisOutput,
    SynthesisRequest, SynthesisSchema, Synthesizer, build_synthesis_prompt, normalize_hashtags,
    normalize_shots, parse_synthesis,
};
