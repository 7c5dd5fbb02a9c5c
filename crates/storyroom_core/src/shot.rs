//! Planned camera shots.

use serde::{Deserialize, Serialize};

/// A single planned camera shot.
///
/// `order` is 1-based. Consumers expect a contiguous `1..=N` sequence, so
/// every list this workspace hands out has been renumbered.
///
/// # Examples
///
/// ```
/// use storyroom_core::Shot;
///
/// let shots = Shot::renumber_by_order(vec![
///     Shot::new("4-8s", "Close on hands", "macro", 7),
///     Shot::new("0-4s", "Wide of the room", "24mm dolly", 2),
/// ]);
///
/// assert_eq!(shots[0].description, "Wide of the room");
/// assert_eq!(shots.iter().map(|s| s.order).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shot {
    /// Time range, e.g. `"0-4s"`
    pub timing: String,
    /// What happens in the shot
    pub description: String,
    /// Camera notes
    pub camera: String,
    /// 1-based position in the shot list
    pub order: u32,
    /// Lighting notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    /// Anything else
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Shot {
    /// Create a shot without lighting or notes.
    pub fn new(
        timing: impl Into<String>,
        description: impl Into<String>,
        camera: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            timing: timing.into(),
            description: description.into(),
            camera: camera.into(),
            order,
            lighting: None,
            notes: None,
        }
    }

    /// Placeholder timing for the shot at `index`: four-second slots.
    pub fn placeholder_timing(index: usize) -> String {
        format!("{}-{}s", index * 4, (index + 1) * 4)
    }

    /// Sort a caller-supplied list by its `order` (stable for ties) and
    /// renumber it `1..=N`.
    pub fn renumber_by_order(mut shots: Vec<Shot>) -> Vec<Shot> {
        shots.sort_by_key(|shot| shot.order);
        Self::renumber_by_position(shots)
    }

    /// Renumber a list `1..=N` by its current position, ignoring existing
    /// `order` values.
    pub fn renumber_by_position(mut shots: Vec<Shot>) -> Vec<Shot> {
        for (index, shot) in shots.iter_mut().enumerate() {
            shot.order = index as u32 + 1;
        }
        shots
    }
}
