//! Context assembly: the user message every round-one persona receives.
//!
//! Sections appear in a fixed order and only when they have content, so the
//! same input always renders the same text and an absent field never leaves
//! an empty heading behind.

use std::collections::BTreeMap;
use storyroom_core::{
    AdvancedRoundtableInput, Character, CharacterRelationship, CueType, Platform,
    SeriesContext, SeriesSoraSettings, Setting, Shot, VisualAsset, VisualTemplate,
};

/// Build the round-one user message.
///
/// Order: brief and platform, visual template, series visual consistency,
/// characters (with per-character visual details), character notes,
/// relationships, settings, visual assets by type.
///
/// # Examples
///
/// ```
/// use storyroom_core::{Platform, SeriesContext};
/// use storyroom_roundtable::build_user_message;
///
/// let message = build_user_message(
///     "A person unwraps a gift at sunrise",
///     Platform::Tiktok,
///     &SeriesContext::default(),
/// );
///
/// assert!(message.starts_with("CREATIVE BRIEF:\nA person unwraps a gift at sunrise"));
/// assert!(!message.contains("CHARACTERS"));
/// ```
pub fn build_user_message(brief: &str, platform: Platform, context: &SeriesContext) -> String {
    let sections = [
        Some(brief_section(brief, platform)),
        context.visual_template.as_ref().map(template_section),
        context.sora_settings().map(consistency_section),
        characters_section(&context.characters),
        text(&context.character_context).map(|notes| format!("CHARACTER NOTES:\n{}", notes)),
        relationships_section(&context.relationships),
        settings_section(&context.settings),
        assets_section(&context.visual_assets),
    ];

    sections.into_iter().flatten().collect::<Vec<_>>().join("\n\n")
}

/// Fold prior edits, a candidate shot list, and guidance into the brief.
///
/// The result replaces the brief for the whole run, so every round-one
/// persona sees the augmentation. Shots are sorted by their `order` and
/// renumbered before rendering.
pub fn augment_brief(input: &AdvancedRoundtableInput) -> String {
    let mut parts = vec![input.input().brief().trim().to_string()];

    if let Some(edits) = text(input.user_prompt_edits()) {
        parts.push(format!(
            "USER'S PROMPT EDITS (respect and build on these changes):\n{}",
            edits
        ));
    }

    let shots = input.normalized_shots();
    if !shots.is_empty() {
        let lines = shots
            .iter()
            .enumerate()
            .map(|(index, shot)| {
                let timing = nonblank(&shot.timing)
                    .map(str::to_string)
                    .unwrap_or_else(|| Shot::placeholder_timing(index));
                let mut line = format!("Shot {} ({}): {}.", shot.order, timing, shot.description);
                if let Some(camera) = nonblank(&shot.camera) {
                    line.push_str(&format!(" Camera: {}.", camera));
                }
                if let Some(lighting) = text(&shot.lighting) {
                    line.push_str(&format!(" Lighting: {}.", lighting));
                }
                if let Some(notes) = text(&shot.notes) {
                    line.push_str(&format!(" Notes: {}.", notes));
                }
                line
            })
            .collect::<Vec<_>>();
        parts.push(format!(
            "REQUESTED SHOT LIST (refine, do not discard):\n{}",
            lines.join("\n")
        ));
    }

    if let Some(guidance) = text(input.additional_guidance()) {
        parts.push(format!("ADDITIONAL GUIDANCE:\n{}", guidance));
    }

    parts.join("\n\n")
}

fn brief_section(brief: &str, platform: Platform) -> String {
    format!(
        "CREATIVE BRIEF:\n{}\n\nTARGET PLATFORM: {}",
        brief.trim(),
        platform.summary()
    )
}

fn template_section(template: &VisualTemplate) -> String {
    let mut out = format!("VISUAL TEMPLATE: {}", template.name);
    if let Some(description) = text(&template.description) {
        out.push_str(&format!("\n{}", description));
    }
    if !template.parameters.is_empty() {
        let params = serde_json::to_string_pretty(&template.parameters).unwrap_or_default();
        out.push_str(&format!("\nParameters:\n{}", params));
    }
    out
}

fn consistency_section(settings: &SeriesSoraSettings) -> String {
    let lines = settings
        .fields()
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("- {}: {}", label, v)))
        .collect::<Vec<_>>();
    format!(
        "SERIES VISUAL CONSISTENCY (every episode must match):\n{}",
        lines.join("\n")
    )
}

fn characters_section(characters: &[Character]) -> Option<String> {
    if characters.is_empty() {
        return None;
    }
    let blocks = characters.iter().map(character_block).collect::<Vec<_>>();
    Some(format!("CHARACTERS:\n{}", blocks.join("\n")))
}

fn character_block(character: &Character) -> String {
    let mut out = format!("- {}", character.name);
    if let Some(role) = text(&character.role) {
        out.push_str(&format!(" ({})", role));
    }
    if let Some(description) = text(&character.description) {
        out.push_str(&format!(": {}", description));
    }
    if let Some(style) = text(&character.performance_style) {
        out.push_str(&format!("\n  Performance style: {}", style));
    }
    if let Some(reference) = text(&character.visual_reference) {
        out.push_str(&format!("\n  Visual reference: {}", reference));
    }

    let mut cues: BTreeMap<CueType, Vec<&str>> = BTreeMap::new();
    for cue in character.visual_cues.iter().flatten() {
        let description = cue.description.trim();
        if !description.is_empty() {
            cues.entry(cue.cue_type).or_default().push(description);
        }
    }
    if !cues.is_empty() {
        out.push_str("\n  VISUAL DETAILS:");
        for (cue_type, details) in cues {
            out.push_str(&format!("\n    {}: {}", cue_type, details.join("; ")));
        }
    }
    out
}

fn relationships_section(relationships: &[CharacterRelationship]) -> Option<String> {
    if relationships.is_empty() {
        return None;
    }
    let lines = relationships
        .iter()
        .map(|rel| {
            let mut line = format!(
                "- {} {} {}: {}",
                rel.character_a,
                rel.arrow(),
                rel.character_b,
                rel.label
            );
            if let Some(description) = text(&rel.description) {
                line.push_str(&format!(" [{}]", description));
            }
            line
        })
        .collect::<Vec<_>>();
    Some(format!("CHARACTER RELATIONSHIPS:\n{}", lines.join("\n")))
}

fn settings_section(settings: &[Setting]) -> Option<String> {
    if settings.is_empty() {
        return None;
    }
    let lines = settings
        .iter()
        .map(|setting| {
            let mut line = format!("- {}", setting.name);
            if let Some(description) = text(&setting.description) {
                line.push_str(&format!(": {}", description));
            }
            let details = [
                text(&setting.location_type),
                text(&setting.time_of_day),
                text(&setting.atmosphere),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
            if !details.is_empty() {
                line.push_str(&format!(" ({})", details.join(", ")));
            }
            line
        })
        .collect::<Vec<_>>();
    Some(format!(
        "SETTINGS:\nAll scene content MUST take place in the following location(s). \
Do not invent other locations.\n{}",
        lines.join("\n")
    ))
}

fn assets_section(assets: &[VisualAsset]) -> Option<String> {
    if assets.is_empty() {
        return None;
    }
    let mut grouped: BTreeMap<_, Vec<&VisualAsset>> = BTreeMap::new();
    for asset in assets {
        grouped.entry(asset.asset_type).or_default().push(asset);
    }
    let partitions = grouped
        .into_iter()
        .map(|(asset_type, members)| {
            let lines = members
                .iter()
                .map(|asset| match text(&asset.description) {
                    Some(description) => format!("- {}: {}", asset.name, description),
                    None => format!("- {}", asset.name),
                })
                .collect::<Vec<_>>();
            format!("{}:\n{}", asset_type.heading(), lines.join("\n"))
        })
        .collect::<Vec<_>>();
    Some(format!("VISUAL ASSETS:\n{}", partitions.join("\n")))
}

/// Trimmed text, or `None` when blank.
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(nonblank)
}

fn nonblank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}
