//! Swappable synthesis output contracts.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// One synthesis output contract: which breakdown sections to produce and
/// how long the optimized prompt should be.
pub trait SynthesisSchema: Send + Sync {
    /// Schema identifier.
    fn name(&self) -> &'static str;

    /// Target length band for the optimized prompt, in characters.
    fn character_band(&self) -> RangeInclusive<usize>;

    /// Breakdown section keys, in the order the model should write them.
    fn sections(&self) -> &'static [&'static str];

    /// How the optimized prompt should read.
    fn style_guidance(&self) -> &'static str;

    /// Output contract appended to the synthesis instructions.
    fn output_contract(&self) -> String {
        let band = self.character_band();
        let sections = self
            .sections()
            .iter()
            .map(|section| format!("    \"{}\": \"...\"", section))
            .collect::<Vec<_>>()
            .join(",\n");
        format!(
            "OUTPUT FORMAT:\n\
Return ONLY a JSON object with exactly these keys:\n\
{{\n  \"detailed_breakdown\": {{\n{}\n  }},\n  \"optimized_prompt\": \"...\",\n  \
\"character_count\": 0,\n  \"hashtags\": [\"#...\"],\n  \"suggested_shots\": [\n    \
{{\"timing\": \"0-4s\", \"description\": \"...\", \"camera\": \"...\", \"order\": 1, \
\"lighting\": \"...\", \"notes\": \"...\"}}\n  ]\n}}\n\n\
The optimized_prompt MUST be between {} and {} characters. \
character_count MUST equal the exact length of optimized_prompt.\n\
hashtags MUST be an array of strings.\n\n\
STYLE:\n{}",
            sections,
            band.start(),
            band.end(),
            self.style_guidance()
        )
    }
}

const BASE_SECTIONS: [&str; 4] = [
    "scene_structure",
    "visual_specs",
    "audio",
    "platform_optimization",
];

/// Short, platform-tuned prompt (up to 500 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTuned;

impl SynthesisSchema for PlatformTuned {
    fn name(&self) -> &'static str {
        "platform_tuned"
    }

    fn character_band(&self) -> RangeInclusive<usize> {
        1..=500
    }

    fn sections(&self) -> &'static [&'static str] {
        &BASE_SECTIONS
    }

    fn style_guidance(&self) -> &'static str {
        "A tight, comma-separated shot description optimized for the target platform: subject, \
action, setting, camera, lighting, mood. No prose flourishes."
    }
}

/// Cinematic narrative prose (600 to 1000 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct CinematicNarrative;

impl SynthesisSchema for CinematicNarrative {
    fn name(&self) -> &'static str {
        "cinematic_narrative"
    }

    fn character_band(&self) -> RangeInclusive<usize> {
        600..=1000
    }

    fn sections(&self) -> &'static [&'static str] {
        &[
            "scene_structure",
            "visual_specs",
            "audio",
            "platform_optimization",
            "subject_direction",
            "lighting_setup",
            "camera_notes",
        ]
    }

    fn style_guidance(&self) -> &'static str {
        "Flowing present-tense cinematic prose that reads like a director describing the finished \
shot: what the camera sees moment to moment, how the light falls, how the subject moves."
    }
}

/// Ultra-detailed production document (2000 to 3000 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionDocument;

impl SynthesisSchema for ProductionDocument {
    fn name(&self) -> &'static str {
        "production_document"
    }

    fn character_band(&self) -> RangeInclusive<usize> {
        2000..=3000
    }

    fn sections(&self) -> &'static [&'static str] {
        &[
            "scene_structure",
            "visual_specs",
            "audio",
            "platform_optimization",
            "subject_direction",
            "lighting_setup",
            "composition_rules",
            "camera_notes",
            "finishing",
        ]
    }

    fn style_guidance(&self) -> &'static str {
        "A production document in prose: every beat timed, every camera move, lens, light, \
performance note and finishing detail specified so nothing is left to chance."
    }
}

/// Named schema selectable from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SchemaKind {
    /// [`PlatformTuned`]
    #[strum(to_string = "platform_tuned", serialize = "platform-tuned")]
    PlatformTuned,
    /// [`CinematicNarrative`]
    #[default]
    #[strum(to_string = "cinematic_narrative", serialize = "cinematic-narrative")]
    CinematicNarrative,
    /// [`ProductionDocument`]
    #[strum(to_string = "production_document", serialize = "production-document")]
    ProductionDocument,
}

impl SchemaKind {
    /// The schema implementation.
    pub fn schema(self) -> Arc<dyn SynthesisSchema> {
        match self {
            SchemaKind::PlatformTuned => Arc::new(PlatformTuned),
            SchemaKind::CinematicNarrative => Arc::new(CinematicNarrative),
            SchemaKind::ProductionDocument => Arc::new(ProductionDocument),
        }
    }
}
