//! Structured synthesis sections.

use serde::{Deserialize, Serialize};

/// Named sections produced by the synthesis step.
///
/// Which sections are populated depends on the synthesis schema in use.
/// `hashtags` is always a list of plain strings; anything else the model
/// returned has already been dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailedBreakdown {
    /// Beat-by-beat scene structure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_structure: Option<String>,
    /// Resolution, aspect ratio, color grading, look
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_specs: Option<String>,
    /// Generic, original music and sound design
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// Platform-specific hooks, pacing, and captions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_optimization: Option<String>,
    /// Performance direction for on-screen subjects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_direction: Option<String>,
    /// Key, fill, and practical lighting plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting_setup: Option<String>,
    /// Framing and composition rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_rules: Option<String>,
    /// Lens and movement notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_notes: Option<String>,
    /// Grade, texture, and delivery notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishing: Option<String>,
    /// Suggested hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl DetailedBreakdown {
    /// Set a text section by its wire name. Returns `false` for unknown names.
    pub fn set_section(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "scene_structure" => &mut self.scene_structure,
            "visual_specs" => &mut self.visual_specs,
            "audio" => &mut self.audio,
            "platform_optimization" => &mut self.platform_optimization,
            "subject_direction" => &mut self.subject_direction,
            "lighting_setup" => &mut self.lighting_setup,
            "composition_rules" => &mut self.composition_rules,
            "camera_notes" => &mut self.camera_notes,
            "finishing" => &mut self.finishing,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Look up a text section by its wire name.
    pub fn section(&self, name: &str) -> Option<&str> {
        match name {
            "scene_structure" => self.scene_structure.as_deref(),
            "visual_specs" => self.visual_specs.as_deref(),
            "audio" => self.audio.as_deref(),
            "platform_optimization" => self.platform_optimization.as_deref(),
            "subject_direction" => self.subject_direction.as_deref(),
            "lighting_setup" => self.lighting_setup.as_deref(),
            "composition_rules" => self.composition_rules.as_deref(),
            "camera_notes" => self.camera_notes.as_deref(),
            "finishing" => self.finishing.as_deref(),
            _ => None,
        }
    }

    /// True when no section and no hashtag is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
