//! Per-invocation roundtable inputs.

use crate::{Platform, SeriesContext, Shot};
use serde::{Deserialize, Serialize};

/// Input for a standard roundtable run.
///
/// Constructed per request and never mutated by the engine.
///
/// # Examples
///
/// ```
/// use storyroom_core::{Platform, RoundtableInput};
///
/// let input = RoundtableInput::builder()
///     .brief("A person unwraps a gift at sunrise")
///     .platform(Platform::Tiktok)
///     .build()
///     .unwrap();
///
/// assert!(input.context().characters.is_empty());
/// assert!(input.user_id().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct RoundtableInput {
    /// Creative brief
    brief: String,
    /// Target platform
    platform: Platform,
    /// Optional series context bundle
    #[builder(default)]
    #[serde(default)]
    context: SeriesContext,
    /// Caller/user identifier, carried for logging only
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl RoundtableInput {
    /// Creates a new input builder.
    pub fn builder() -> RoundtableInputBuilder {
        RoundtableInputBuilder::default()
    }

    /// Copy of this input with a different brief.
    pub fn with_brief(&self, brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            ..self.clone()
        }
    }
}

/// Input for the advanced roundtable: prior edits, a candidate shot list,
/// and free-text guidance layered over a standard input.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct AdvancedRoundtableInput {
    /// The underlying standard input
    input: RoundtableInput,
    /// The user's direct edits to a previous prompt
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_prompt_edits: Option<String>,
    /// Candidate shot list; renumbered by `order` before use
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shot_list: Option<Vec<Shot>>,
    /// Free-text guidance
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_guidance: Option<String>,
}

impl AdvancedRoundtableInput {
    /// Creates a new input builder.
    pub fn builder() -> AdvancedRoundtableInputBuilder {
        AdvancedRoundtableInputBuilder::default()
    }

    /// Caller-supplied shots sorted by `order` and renumbered `1..=N`.
    /// Empty when no shot list was given.
    pub fn normalized_shots(&self) -> Vec<Shot> {
        self.shot_list
            .clone()
            .map(Shot::renumber_by_order)
            .unwrap_or_default()
    }
}
