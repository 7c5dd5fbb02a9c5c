//! Final roundtable artifact.

use crate::{AgentDiscussion, DetailedBreakdown, Shot};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Everything a roundtable run hands back to its caller.
///
/// A result is always well-typed, even when synthesis degraded. Check
/// [`RoundtableResult::is_usable`] before submitting the prompt anywhere.
///
/// # Examples
///
/// ```
/// use storyroom_core::{AgentDiscussion, RoundtableResult};
///
/// let empty = RoundtableResult::degraded(AgentDiscussion::default());
/// assert!(!empty.is_usable());
/// assert_eq!(empty.character_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundtableResult {
    /// Full two-round transcript
    pub discussion: AgentDiscussion,
    /// Structured synthesis sections
    pub detailed_breakdown: DetailedBreakdown,
    /// The final video-generation prompt
    pub optimized_prompt: String,
    /// Length of `optimized_prompt` in characters, unless the synthesis
    /// step reported its own count
    pub character_count: usize,
    /// Suggested hashtags
    pub hashtags: Vec<String>,
    /// Suggested shot list, ordered `1..=N`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_shots: Option<Vec<Shot>>,
}

impl RoundtableResult {
    /// Empty-but-valid result used when synthesis output is unusable.
    pub fn degraded(discussion: AgentDiscussion) -> Self {
        Self {
            discussion,
            detailed_breakdown: DetailedBreakdown::default(),
            optimized_prompt: String::new(),
            character_count: 0,
            hashtags: Vec::new(),
            suggested_shots: None,
        }
    }

    /// True when the optimized prompt has any content.
    pub fn is_usable(&self) -> bool {
        !self.optimized_prompt.trim().is_empty()
    }

    /// True when the prompt length falls inside `band`.
    pub fn within_band(&self, band: RangeInclusive<usize>) -> bool {
        band.contains(&self.optimized_prompt.chars().count())
    }
}
