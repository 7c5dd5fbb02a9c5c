//! Core data types for the Storyroom prompt roundtable.
//!
//! This crate provides the foundation data types shared by every Storyroom crate:
//! the provider-neutral request/response model, and the values that flow through
//! a roundtable run (personas, platforms, series context, transcripts, results).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod breakdown;
mod discussion;
mod input;
mod message;
mod output;
mod persona;
mod platform;
mod request;
mod result;
mod role;
mod series;
mod shot;

pub use breakdown::DetailedBreakdown;
pub use discussion::{AgentDiscussion, AgentResponse};
pub use input::{
    AdvancedRoundtableInput, AdvancedRoundtableInputBuilder, RoundtableInput,
    RoundtableInputBuilder,
};
pub use message::Message;
pub use output::Output;
pub use persona::PersonaName;
pub use platform::Platform;
pub use request::{
    CompletionOptions, CompletionOptionsBuilder, GenerateRequest, GenerateRequestBuilder,
    GenerateResponse,
};
pub use result::RoundtableResult;
pub use role::Role;
pub use series::{
    Character, CharacterRelationship, CueType, SeriesContext, SeriesSoraSettings, Setting,
    VisualAsset, VisualAssetType, VisualCue, VisualTemplate,
};
pub use shot::Shot;
