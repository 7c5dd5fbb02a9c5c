//! Series context: the characters, places, assets and style anchors a
//! brief belongs to.
//!
//! All of it is optional. Field names follow the snake_case JSON the
//! surrounding application stores, so a series export can be deserialized
//! directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recurring character in a series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Who the character is
    pub description: Option<String>,
    /// Narrative role (protagonist, sidekick, ...)
    pub role: Option<String>,
    /// How the character should be performed on screen
    pub performance_style: Option<String>,
    /// Description of the character's reference image, if one exists
    pub visual_reference: Option<String>,
    /// Appearance details that must stay consistent across episodes
    pub visual_cues: Option<Vec<VisualCue>>,
}

/// One appearance detail of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualCue {
    /// Which aspect of appearance this cue covers
    pub cue_type: CueType,
    /// The detail itself
    pub description: String,
}

/// Category of a visual cue. Ordering is the rendering order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum CueType {
    /// Facial features
    #[strum(to_string = "Face")]
    Face,
    /// Hair style and color
    #[strum(to_string = "Hair")]
    Hair,
    /// Clothing
    #[strum(to_string = "Wardrobe")]
    Wardrobe,
    /// Props worn or carried
    #[strum(to_string = "Accessories")]
    Accessories,
    /// Posture, gait, gestures
    #[strum(to_string = "Body language")]
    BodyLanguage,
    /// Anything else
    #[serde(other)]
    #[strum(to_string = "Other")]
    Other,
}

/// A location scenes can take place in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    /// Location name
    pub name: String,
    /// What the place looks like
    pub description: Option<String>,
    /// Interior, exterior, ...
    pub location_type: Option<String>,
    /// Typical time of day
    pub time_of_day: Option<String>,
    /// Mood of the place
    pub atmosphere: Option<String>,
}

/// A relationship between two characters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterRelationship {
    /// First character's name
    pub character_a: String,
    /// Second character's name
    pub character_b: String,
    /// Short label ("siblings", "mentor of")
    pub label: String,
    /// Longer description
    pub description: Option<String>,
    /// Whether the relationship reads the same in both directions
    pub is_symmetric: bool,
}

impl CharacterRelationship {
    /// `↔` for symmetric relationships, `→` otherwise.
    pub fn arrow(&self) -> &'static str {
        if self.is_symmetric { "↔" } else { "→" }
    }
}

/// A reference asset attached to the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualAsset {
    /// Asset name
    pub name: String,
    /// What kind of asset this is
    pub asset_type: VisualAssetType,
    /// Text description of the asset
    #[serde(default)]
    pub description: Option<String>,
}

/// Kind of visual asset. Ordering is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualAssetType {
    /// Brand or series logo
    Logo,
    /// Color palette swatch
    ColorPalette,
    /// Reference image of a location
    SettingReference,
    /// Reference image for overall look
    StyleReference,
    /// Anything else
    #[serde(other)]
    Other,
}

impl VisualAssetType {
    /// Every asset type, in rendering order.
    pub const ALL: [VisualAssetType; 5] = [
        VisualAssetType::Logo,
        VisualAssetType::ColorPalette,
        VisualAssetType::SettingReference,
        VisualAssetType::StyleReference,
        VisualAssetType::Other,
    ];

    /// Heading used when rendering assets of this type.
    pub fn heading(&self) -> &'static str {
        match self {
            VisualAssetType::Logo => "LOGOS",
            VisualAssetType::ColorPalette => "COLOR PALETTES",
            VisualAssetType::SettingReference => "SETTING REFERENCES",
            VisualAssetType::StyleReference => "STYLE REFERENCES",
            VisualAssetType::Other => "OTHER ASSETS",
        }
    }
}

/// Series-level style anchors blended into every prompt of a series.
///
/// # Examples
///
/// ```
/// use storyroom_core::SeriesSoraSettings;
///
/// let mut settings = SeriesSoraSettings::default();
/// assert!(settings.is_empty());
///
/// settings.sora_narrative_prefix = Some("In Maya's Journey, ".to_string());
/// assert!(!settings.is_empty());
/// assert_eq!(settings.narrative_prefix(), Some("In Maya's Journey, "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSoraSettings {
    /// Camera style (handheld, locked-off, gimbal...)
    pub sora_camera_style: Option<String>,
    /// Lighting mood
    pub sora_lighting_mood: Option<String>,
    /// Color palette
    pub sora_color_palette: Option<String>,
    /// Overall tone
    pub sora_tone: Option<String>,
    /// Phrase every prompt in the series opens with
    pub sora_narrative_prefix: Option<String>,
}

impl SeriesSoraSettings {
    /// True when no field carries non-whitespace text.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// Narrative prefix, if set to non-blank text. Not trimmed: trailing
    /// spaces are part of the phrase.
    pub fn narrative_prefix(&self) -> Option<&str> {
        non_blank(&self.sora_narrative_prefix)
    }

    /// Labelled non-blank fields in rendering order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("Narrative prefix", non_blank(&self.sora_narrative_prefix)),
            ("Tone", non_blank(&self.sora_tone)),
            ("Camera style", non_blank(&self.sora_camera_style)),
            ("Lighting mood", non_blank(&self.sora_lighting_mood)),
            ("Color palette", non_blank(&self.sora_color_palette)),
        ]
    }
}

/// A reusable visual template chosen for the brief.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualTemplate {
    /// Template name
    pub name: String,
    /// What the template is for
    pub description: Option<String>,
    /// Free-form template parameters
    pub parameters: BTreeMap<String, serde_json::Value>,
}

/// Everything known about the series a brief belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesContext {
    /// Visual template selected for this brief
    pub visual_template: Option<VisualTemplate>,
    /// Recurring characters
    pub characters: Vec<Character>,
    /// Free-text notes about the characters in this episode
    pub character_context: Option<String>,
    /// Relationships between characters
    pub relationships: Vec<CharacterRelationship>,
    /// Locations
    pub settings: Vec<Setting>,
    /// Reference assets
    pub visual_assets: Vec<VisualAsset>,
    /// Series-level style anchors
    pub sora_settings: Option<SeriesSoraSettings>,
}

impl SeriesContext {
    /// Style anchors, if any field is set.
    pub fn sora_settings(&self) -> Option<&SeriesSoraSettings> {
        self.sora_settings.as_ref().filter(|s| !s.is_empty())
    }
}

/// Returns the text if it contains anything besides whitespace.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
